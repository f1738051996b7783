use bmi_classifier::{cli, core::Classifier};
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings = cli::bootstrap();
    let classifier = Classifier::from_settings(&settings.model);

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let output = cli::run_classify(&args, &classifier);

    println!("{}", output.body);
    ExitCode::from(output.exit_code)
}
