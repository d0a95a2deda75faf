//! Static reference text shown alongside each prediction.

use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DiseaseInfo {
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub actions: &'static [&'static str],
    pub prevention: &'static [&'static str],
}

impl DiseaseInfo {
    pub const UNKNOWN: DiseaseInfo = DiseaseInfo {
        description: "N/A",
        symptoms: &[],
        actions: &[],
        prevention: &[],
    };
}

static CATALOG: &[(&str, DiseaseInfo)] = &[
    (
        "Measles",
        DiseaseInfo {
            description: "A highly contagious viral infection common in children, preventable by vaccine.",
            symptoms: &[
                "High fever, often over 104°F (40°C)",
                "Cough and runny nose",
                "Red, watery eyes (conjunctivitis)",
                "Koplik spots (tiny white spots) inside the mouth",
                "A widespread skin rash of large, flat blotches",
            ],
            actions: &[
                "Consult a doctor immediately for a proper diagnosis.",
                "Isolate to prevent spreading the virus to others.",
                "Rest and drink plenty of fluids like water and juice.",
                "Avoid scratching the rash.",
            ],
            prevention: &[
                "The MMR (measles, mumps, and rubella) vaccine is highly effective.",
                "Avoid contact with infected individuals.",
            ],
        },
    ),
    (
        "Monkeypox",
        DiseaseInfo {
            description: "A rare viral disease, similar to smallpox but milder. It is typically found in parts of Africa.",
            symptoms: &[
                "Fever and headache",
                "Swollen lymph nodes",
                "Muscle aches and backache",
                "A rash that can look like pimples or blisters",
                "Lesions that crust, scab over, and fall off",
            ],
            actions: &[
                "Seek immediate medical attention for diagnosis and guidance.",
                "Avoid close contact with people and animals.",
                "Keep lesions clean and covered to prevent secondary infections.",
            ],
            prevention: &[
                "Avoid contact with animals that could harbor the virus.",
                "Practice good hand hygiene after contact with infected animals or humans.",
            ],
        },
    ),
    (
        "Chickenpox",
        DiseaseInfo {
            description: "A very contagious infection caused by the varicella-zoster virus, resulting in an itchy rash.",
            symptoms: &[
                "Itchy rash with small, fluid-filled blisters",
                "Fever and tiredness",
                "Loss of appetite and headache",
                "Rash appears first on the chest, back, and face",
            ],
            actions: &[
                "Consult a healthcare provider to confirm the diagnosis.",
                "Avoid scratching the blisters to prevent scarring.",
                "Take oatmeal baths to soothe itchy skin.",
                "Stay home from school or work until all blisters have crusted over.",
            ],
            prevention: &[
                "The chickenpox vaccine is the best way to prevent it.",
                "Avoid close contact with anyone who has chickenpox.",
            ],
        },
    ),
    (
        "HFMD",
        DiseaseInfo {
            description: "A mild, contagious viral infection common in young children.",
            symptoms: &[
                "Fever and sore throat",
                "Painful, red, blister-like lesions in the mouth",
                "A non-itchy skin rash on the palms and soles",
                "Rash can also appear on knees, elbows, and buttocks",
            ],
            actions: &[
                "See a doctor for proper diagnosis.",
                "Drink plenty of liquids to stay hydrated.",
                "Avoid spicy or acidic foods that can irritate mouth sores.",
            ],
            prevention: &[
                "Wash hands frequently with soap and water.",
                "Disinfect frequently touched surfaces.",
                "Avoid close contact such as kissing or sharing utensils.",
            ],
        },
    ),
    (
        "Cowpox",
        DiseaseInfo {
            description: "A rare skin infection caused by the cowpox virus, transmitted by contact with infected animals.",
            symptoms: &[
                "Localized, painful skin lesions",
                "Fever and fatigue",
                "Swollen lymph glands",
            ],
            actions: &[
                "Consult a doctor for diagnosis and care.",
                "Keep the lesion clean and covered.",
            ],
            prevention: &["Avoid direct contact with lesions on infected animals."],
        },
    ),
    (
        "Healthy",
        DiseaseInfo {
            description: "The scan indicates no signs of the skin diseases the model was trained to identify.",
            symptoms: &["No visible rashes, lesions, or blisters detected."],
            actions: &[
                "Continue with a good skincare routine.",
                "Consult a dermatologist for any concerns.",
            ],
            prevention: &[
                "Maintain good hygiene.",
                "Protect your skin from excessive sun exposure.",
            ],
        },
    ),
];

/// Looks up the reference entry for a label name.
pub fn lookup(label: &str) -> Option<&'static DiseaseInfo> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, info)| info)
}
