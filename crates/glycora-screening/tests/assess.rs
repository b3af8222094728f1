use glycora_core::models::assessment::RiskTier;
use glycora_core::models::survey::SurveyRecord;
use glycora_screening::RiskClassifier;
use glycora_screening::recommendations::RecommendationCatalog;

fn record(bmi: f64, age: u8, high_bp: u8, high_chol: u8, smoker: u8, phys_activity: u8) -> SurveyRecord {
    SurveyRecord {
        bmi,
        age,
        high_bp,
        high_chol,
        smoker,
        phys_activity,
    }
}

#[test]
fn healthy_profile_when_nothing_hits() {
    let classifier = RiskClassifier::default();
    let assessment = classifier.assess(&record(29.0, 5, 0, 0, 0, 1));

    assert_eq!(assessment.condition, RiskTier::Healthy);
    assert_eq!(
        assessment.explanation,
        "None of the provided health indicators raised a risk flag."
    );
    assert_eq!(
        assessment.recommendations,
        vec![RecommendationCatalog::default().maintenance().to_string()]
    );
}

#[test]
fn all_six_indicators_hit_the_diabetes_table() {
    let classifier = RiskClassifier::default();
    let assessment = classifier.assess(&record(32.0, 10, 1, 1, 1, 0));

    assert_eq!(assessment.condition, RiskTier::HighConcern);
    assert_eq!(
        assessment.explanation,
        "The following factors contributed to this assessment: \
         BMI, Age, HighBP, HighChol, Smoker, PhysActivity."
    );

    let catalog = RecommendationCatalog::default();
    assert_eq!(
        assessment.recommendations,
        vec![
            catalog.bmi.clone(),
            catalog.age.clone(),
            catalog.high_bp.clone(),
            catalog.high_chol.clone(),
            catalog.smoker.clone(),
            catalog.phys_activity.clone(),
        ]
    );
}

#[test]
fn two_prediabetes_hits_stay_low_concern() {
    let classifier = RiskClassifier::default();
    let assessment = classifier.assess(&record(30.0, 9, 0, 0, 0, 1));

    assert_eq!(assessment.condition, RiskTier::LowConcern);
    assert_eq!(
        assessment.explanation,
        "The following factors contributed to this assessment: BMI, Age."
    );
    assert_eq!(assessment.recommendations.len(), 2);
}

#[test]
fn three_prediabetes_hits_reach_medium_concern() {
    // BMI 30 and Age 9 trip only the pre-diabetes table; HighBP trips both,
    // leaving the diabetes table one hit short of taking over.
    let classifier = RiskClassifier::default();
    let assessment = classifier.assess(&record(30.0, 9, 1, 0, 0, 1));

    assert_eq!(assessment.condition, RiskTier::MediumConcern);
    assert_eq!(
        assessment.explanation,
        "The following factors contributed to this assessment: BMI, Age, HighBP."
    );
}

#[test]
fn four_diabetes_hits_outrank_the_prediabetes_tally() {
    let classifier = RiskClassifier::default();
    let assessment = classifier.assess(&record(32.0, 5, 1, 1, 1, 1));

    assert_eq!(assessment.condition, RiskTier::HighConcern);
    assert_eq!(
        assessment.explanation,
        "The following factors contributed to this assessment: \
         BMI, HighBP, HighChol, Smoker."
    );
}

#[test]
fn flagged_indicators_follow_canonical_order() {
    // Trip Smoker, HighBP, and BMI; the explanation must still list them in
    // dataset order, not in hit-discovery order.
    let classifier = RiskClassifier::default();
    let assessment = classifier.assess(&record(30.0, 2, 1, 0, 1, 1));

    assert_eq!(
        assessment.explanation,
        "The following factors contributed to this assessment: BMI, HighBP, Smoker."
    );
}

#[test]
fn assessment_is_idempotent() {
    let classifier = RiskClassifier::default();
    let survey = record(33.5, 11, 1, 0, 1, 0);

    assert_eq!(classifier.assess(&survey), classifier.assess(&survey));
}

#[test]
fn inactivity_hit_requires_exact_zero() {
    let classifier = RiskClassifier::default();

    // 0 flags inactivity.
    let inactive = classifier.assess(&record(20.0, 2, 0, 0, 0, 0));
    assert_eq!(inactive.condition, RiskTier::LowConcern);
    assert_eq!(
        inactive.explanation,
        "The following factors contributed to this assessment: PhysActivity."
    );

    // Any other value does not, even an out-of-range one; the cutoff is an
    // equality test, not an ordering test.
    let active = classifier.assess(&record(20.0, 2, 0, 0, 0, 1));
    assert_eq!(active.condition, RiskTier::Healthy);
    let out_of_range = classifier.assess(&record(20.0, 2, 0, 0, 0, 2));
    assert_eq!(out_of_range.condition, RiskTier::Healthy);
}

#[test]
fn assess_json_parses_a_request_payload() {
    let classifier = RiskClassifier::default();
    let payload = r#"{
        "BMI": 32.0,
        "Age": 10,
        "HighBP": 1,
        "HighChol": 1,
        "Smoker": 1,
        "PhysActivity": 0
    }"#;

    let assessment = classifier.assess_json(payload).unwrap();
    assert_eq!(assessment.condition, RiskTier::HighConcern);
    assert_eq!(assessment.recommendations.len(), 6);
}

#[test]
fn assess_json_rejects_malformed_payloads() {
    let classifier = RiskClassifier::default();
    assert!(classifier.assess_json("{\"BMI\": true}").is_err());
}
