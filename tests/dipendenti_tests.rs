mod common;
use common::{ors, roster_csv, roster_dump, seed_mirror, setup_base, setup_mirror};
use std::fs;

#[test]
fn test_roster_export_writes_both_artifacts() {
    let mirror = setup_mirror("roster_both");
    seed_mirror(&mirror);
    let base = setup_base("roster_both");

    ors()
        .args([
            "dipendenti",
            "--db",
            &mirror,
            "--base-dir",
            &base.to_string_lossy(),
        ])
        .assert()
        .success();

    let sql = fs::read_to_string(roster_dump(&base)).expect("read dump");
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS dipendenti"));
    assert!(sql.contains("DELETE FROM dipendenti;"));
    assert!(sql.contains(
        "INSERT INTO dipendenti (Neg, NOME, Ore_Sett, CODICEPERSONALE, Livello, \
         DATA_ASSUNZIONE, DATA_FINE_CONTRATTO, Lunedi, Martedi, Mercoledi, Giovedi, \
         Venerdi, Sabato, Domenica) VALUES ('A1', 'Mario Rossi', 40, '001', 3, \
         '2024-12-31', '2020-01-01', 8, 8, 8, 8, 8, 0, 0);"
    ));

    let csv = fs::read_to_string(roster_csv(&base)).expect("read csv");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some(
            "Neg,NOME,Ore_Sett,CODICEPERSONALE,Livello,DATA_ASSUNZIONE,\
             DATA_FINE_CONTRATTO,Lunedi,Martedi,Mercoledi,Giovedi,Venerdi,Sabato,Domenica"
        )
    );
    assert_eq!(
        lines.next(),
        Some("A1,Mario Rossi,40,001,3,2024-12-31,2020-01-01,8,8,8,8,8,0,0")
    );
    assert_eq!(
        lines.next(),
        Some("B2,Luigi Verdi,36,002,2,2025-06-30,2021-05-01,8,8,8,8,4,0,0")
    );
}

#[test]
fn test_roster_export_filters_excluded_store_codes() {
    let mirror = setup_mirror("roster_filter");
    seed_mirror(&mirror);
    let base = setup_base("roster_filter");

    ors()
        .args([
            "dipendenti",
            "--db",
            &mirror,
            "--base-dir",
            &base.to_string_lossy(),
        ])
        .assert()
        .success();

    let sql = fs::read_to_string(roster_dump(&base)).expect("read dump");
    assert!(!sql.contains("'WEB'"));
    assert!(!sql.contains("'003'"));
}

#[test]
fn test_roster_stage_emits_success_record() {
    let mirror = setup_mirror("roster_record");
    seed_mirror(&mirror);
    let base = setup_base("roster_record");

    ors()
        .args([
            "dipendenti",
            "--db",
            &mirror,
            "--base-dir",
            &base.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "@@ORARI-STAGE@@ {\"outcome\":\"success\"}",
        ));
}

#[test]
fn test_roster_stage_failure_collapses_to_record() {
    // Mirror without any tables: the query fails, the stage reports a
    // failure record and a non-zero (advisory) exit code.
    let mirror = setup_mirror("roster_failure");
    rusqlite::Connection::open(&mirror).expect("create empty mirror");
    let base = setup_base("roster_failure");

    ors()
        .args([
            "dipendenti",
            "--db",
            &mirror,
            "--base-dir",
            &base.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stdout(predicates::str::contains("\"outcome\":\"failure\""));

    assert!(!roster_dump(&base).exists());
}
