use super::*;

fn patient() -> PatientRegistration {
    PatientRegistration {
        first_name: " Ada ".to_owned(),
        last_name: "Lovelace".to_owned(),
        date_of_birth: "1990-12-10".to_owned(),
        email: "ada@x.test".to_owned(),
        phone_number: "555-0100".to_owned(),
        password: " pw ".to_owned(),
    }
}

#[test]
fn patient_registration_trims_text_fields() {
    let body = validate_patient_registration(&patient()).unwrap();
    assert_eq!(body.first_name, "Ada");
    assert_eq!(body.password, " pw ");
}

#[test]
fn patient_registration_requires_every_field() {
    let mut input = patient();
    input.phone_number = "  ".to_owned();
    assert_eq!(validate_patient_registration(&input), Err(REGISTRATION_INCOMPLETE));

    let mut input = patient();
    input.password.clear();
    assert_eq!(validate_patient_registration(&input), Err(REGISTRATION_INCOMPLETE));
}

#[test]
fn doctor_registration_requires_specialization() {
    let input = DoctorRegistration {
        first_name: "Gregory".to_owned(),
        last_name: "House".to_owned(),
        specialization: String::new(),
        email: "house@x.test".to_owned(),
        phone_number: "555-0101".to_owned(),
        password: "pw".to_owned(),
    };
    assert_eq!(validate_doctor_registration(&input), Err(REGISTRATION_INCOMPLETE));

    let input = DoctorRegistration { specialization: "Diagnostics".to_owned(), ..input };
    assert_eq!(validate_doctor_registration(&input).unwrap().specialization, "Diagnostics");
}
