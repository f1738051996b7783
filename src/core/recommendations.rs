use crate::core::categories::BmiCategory;
use serde::Serialize;

/// Health guidance attached to a BMI analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendations {
    pub diet: &'static [&'static str],
    pub exercise: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
}

const UNDERWEIGHT: Recommendations = Recommendations {
    diet: &[
        "Increase caloric intake with nutrient-rich foods",
        "Include protein-rich foods like lean meats, eggs, and legumes",
        "Add healthy fats from nuts, avocados, and olive oil",
        "Consider protein shakes or smoothies",
    ],
    exercise: &[
        "Focus on strength training to build muscle mass",
        "Include resistance exercises 2-3 times per week",
        "Avoid excessive cardio that burns too many calories",
        "Work with a trainer to develop a balanced program",
    ],
    lifestyle: &[
        "Eat smaller, more frequent meals throughout the day",
        "Track your food intake to ensure adequate calories",
        "Get adequate sleep for muscle recovery",
        "Consider consulting a nutritionist",
    ],
};

const NORMAL_WEIGHT: Recommendations = Recommendations {
    diet: &[
        "Maintain a balanced diet with all food groups",
        "Focus on whole foods and limit processed foods",
        "Stay hydrated with plenty of water",
        "Practice portion control",
    ],
    exercise: &[
        "Aim for 150 minutes of moderate exercise per week",
        "Include both cardio and strength training",
        "Find activities you enjoy to stay motivated",
        "Gradually increase intensity and duration",
    ],
    lifestyle: &[
        "Maintain regular meal times",
        "Get 7-9 hours of quality sleep",
        "Manage stress through relaxation techniques",
        "Regular health check-ups",
    ],
};

const OVERWEIGHT: Recommendations = Recommendations {
    diet: &[
        "Create a moderate calorie deficit",
        "Increase protein intake to preserve muscle",
        "Focus on fiber-rich foods for satiety",
        "Limit added sugars and refined carbohydrates",
    ],
    exercise: &[
        "Start with low-impact cardio like walking or swimming",
        "Gradually increase exercise duration and intensity",
        "Include strength training to build muscle",
        "Aim for 200-300 minutes of exercise per week",
    ],
    lifestyle: &[
        "Keep a food diary to track eating patterns",
        "Set realistic weight loss goals (1-2 lbs per week)",
        "Get adequate sleep to support metabolism",
        "Consider working with a health coach",
    ],
};

const OBESE: Recommendations = Recommendations {
    diet: &[
        "Consult with a healthcare provider for personalized plan",
        "Focus on whole, unprocessed foods",
        "Practice mindful eating and portion control",
        "Consider working with a registered dietitian",
    ],
    exercise: &[
        "Start with low-impact activities like walking",
        "Work with a fitness professional for safe progression",
        "Include both cardio and strength training",
        "Set realistic, achievable fitness goals",
    ],
    lifestyle: &[
        "Address underlying health conditions",
        "Consider behavioral therapy for sustainable changes",
        "Build a support system for accountability",
        "Regular medical monitoring",
    ],
};

/// Recommendations for a category; unknown categories get the normal-weight set
pub fn recommendations_for(category: Option<BmiCategory>) -> Recommendations {
    match category {
        Some(BmiCategory::Underweight) => UNDERWEIGHT,
        Some(BmiCategory::Overweight) => OVERWEIGHT,
        Some(BmiCategory::Obese) => OBESE,
        Some(BmiCategory::NormalWeight) | None => NORMAL_WEIGHT,
    }
}
