//! Interned-patient rows.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the interned-patient query: an open inpatient encounter joined
/// with its patient and bed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Patient code
    pub cd_paciente: i64,

    /// Patient name
    pub nm_paciente: String,

    /// Birth date
    pub dt_nascimento: Option<NaiveDateTime>,

    /// National ID (CPF)
    pub nr_cpf: Option<String>,

    /// Sex (`M`/`F`)
    pub tp_sexo: Option<String>,

    /// Encounter code
    pub cd_atendimento: i64,

    /// Encounter start
    pub dt_atendimento: NaiveDateTime,

    /// Bed description
    pub ds_leito: String,

    /// Bed code
    pub cd_leito: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_serialized_keys() {
        let record = PatientRecord {
            cd_paciente: 1001,
            nm_paciente: "JOAO DA SILVA".to_string(),
            dt_nascimento: NaiveDate::from_ymd_opt(1980, 5, 17).and_then(|d| d.and_hms_opt(0, 0, 0)),
            nr_cpf: Some("98765432100".to_string()),
            tp_sexo: Some("M".to_string()),
            cd_atendimento: 555,
            dt_atendimento: NaiveDate::from_ymd_opt(2024, 3, 1)
                .and_then(|d| d.and_hms_opt(8, 30, 0))
                .unwrap(),
            ds_leito: "UTI 01".to_string(),
            cd_leito: 12,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["cd_leito"], 12);
        assert_eq!(json["ds_leito"], "UTI 01");
        assert_eq!(json["dt_atendimento"], "2024-03-01T08:30:00");
        assert_eq!(json.as_object().unwrap().len(), 9);
    }
}
