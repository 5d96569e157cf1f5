//! Test fixtures for generating rows with realistic data.

use fake::{
    faker::{name::en::Name, number::en::NumberWithFormat},
    Fake,
};
use hospital_query_domain::{PatientRecord, UserRecord};

use crate::builders::{PatientRecordBuilder, UserRecordBuilder};

/// CPF of the first user in [`sample_users`].
pub const SAMPLE_CPF: &str = "12345678900";

/// Create a test user with a random name and CPF
pub fn create_test_user() -> UserRecord {
    let name: String = Name().fake();
    let code = name.replace(' ', ".").to_uppercase();
    UserRecordBuilder::new()
        .with_code(code)
        .with_name(name.to_uppercase())
        .with_cpf(NumberWithFormat("###########").fake::<String>())
        .build()
}

/// Create a test patient with a random name in the given bed
pub fn create_test_patient(bed: i64) -> PatientRecord {
    let name: String = Name().fake();
    PatientRecordBuilder::new()
        .with_patient((1i64..100_000).fake::<i64>(), name.to_uppercase())
        .with_encounter((1i64..1_000_000).fake::<i64>())
        .in_bed(bed)
        .build()
}

/// Three active users; the first and last share [`SAMPLE_CPF`].
pub fn sample_users() -> Vec<UserRecord> {
    vec![
        UserRecordBuilder::new()
            .with_code("ANA.LIMA")
            .with_name("ANA LIMA")
            .with_cpf(SAMPLE_CPF)
            .build(),
        UserRecordBuilder::new()
            .with_code("BRUNO.COSTA")
            .with_name("BRUNO COSTA")
            .with_cpf("98765432100")
            .pending_first_login()
            .build(),
        UserRecordBuilder::new()
            .with_code("CARLA.REIS")
            .with_name("CARLA REIS")
            .with_cpf(SAMPLE_CPF)
            .without_first_login_flag()
            .build(),
    ]
}

/// Three interned patients, two of them sharing bed 12.
pub fn sample_patients() -> Vec<PatientRecord> {
    vec![
        PatientRecordBuilder::new()
            .with_patient(1001, "JOAO DA SILVA")
            .with_encounter(5001)
            .with_cpf("11122233344")
            .with_sex("M")
            .born_on(1950, 7, 2)
            .admitted_on(2024, 3, 1)
            .in_bed(12)
            .build(),
        PatientRecordBuilder::new()
            .with_patient(1002, "MARIA PEREIRA")
            .with_encounter(5002)
            .born_on(1988, 11, 23)
            .admitted_on(2024, 3, 4)
            .in_bed(12)
            .build(),
        PatientRecordBuilder::new()
            .with_patient(1003, "PEDRO ALVES")
            .with_encounter(5003)
            .with_sex("M")
            .admitted_on(2024, 3, 5)
            .in_bed(310)
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_user_has_eleven_digit_cpf() {
        let user = create_test_user();
        assert_eq!(user.cpf.len(), 11);
        assert!(user.cpf.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_sample_patients_share_a_bed() {
        let in_bed_12 = sample_patients()
            .into_iter()
            .filter(|p| p.cd_leito == 12)
            .count();
        assert_eq!(in_bed_12, 2);
    }
}
