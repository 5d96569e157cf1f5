//! SQL text executed by the repositories.
//!
//! Every statement is fixed; at most one value is bound (`$1`).

/// Active users with a registered CPF. User codes starting with a digit
/// belong to service accounts and are left out.
pub const SELECT_ACTIVE_USERS: &str = r#"
SELECT cd_usuario, nm_usuario, cpf, sn_senha_plogin, sn_ativo
FROM dbasgu.usuarios
WHERE sn_ativo = 'S'
  AND cpf IS NOT NULL
  AND cd_usuario !~ '^[0-9]'
ORDER BY cd_usuario ASC
"#;

/// Patients in an open inpatient encounter, with their bed.
pub const SELECT_INTERNED_PATIENTS: &str = r#"
SELECT
  paciente.cd_paciente,
  paciente.nm_paciente,
  paciente.dt_nascimento,
  paciente.nr_cpf,
  paciente.tp_sexo,
  atendime.cd_atendimento,
  atendime.dt_atendimento,
  leito.ds_leito,
  leito.cd_leito
FROM atendime
  INNER JOIN paciente ON paciente.cd_paciente = atendime.cd_paciente
  INNER JOIN leito ON leito.cd_leito = atendime.cd_leito
WHERE atendime.tp_atendimento = 'I'
  AND atendime.dt_alta IS NULL
"#;

/// Same as [`SELECT_INTERNED_PATIENTS`], narrowed to one bed (`$1`).
pub const SELECT_INTERNED_PATIENTS_BY_BED: &str = r#"
SELECT
  paciente.cd_paciente,
  paciente.nm_paciente,
  paciente.dt_nascimento,
  paciente.nr_cpf,
  paciente.tp_sexo,
  atendime.cd_atendimento,
  atendime.dt_atendimento,
  leito.ds_leito,
  leito.cd_leito
FROM atendime
  INNER JOIN paciente ON paciente.cd_paciente = atendime.cd_paciente
  INNER JOIN leito ON leito.cd_leito = atendime.cd_leito
WHERE atendime.tp_atendimento = 'I'
  AND atendime.dt_alta IS NULL
  AND leito.cd_leito = $1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(sql: &str) -> usize {
        sql.matches('$').count()
    }

    #[test]
    fn test_only_bed_query_binds() {
        assert_eq!(placeholders(SELECT_ACTIVE_USERS), 0);
        assert_eq!(placeholders(SELECT_INTERNED_PATIENTS), 0);
        assert_eq!(placeholders(SELECT_INTERNED_PATIENTS_BY_BED), 1);
    }

    #[test]
    fn test_bed_query_extends_interned_query() {
        let base = SELECT_INTERNED_PATIENTS.trim_end();
        assert!(SELECT_INTERNED_PATIENTS_BY_BED.starts_with(base));
        assert!(SELECT_INTERNED_PATIENTS_BY_BED.contains("leito.cd_leito = $1"));
    }

    #[test]
    fn test_active_user_filters() {
        assert!(SELECT_ACTIVE_USERS.contains("sn_ativo = 'S'"));
        assert!(SELECT_ACTIVE_USERS.contains("cpf IS NOT NULL"));
        assert!(SELECT_ACTIVE_USERS.contains("ORDER BY cd_usuario ASC"));
    }
}
