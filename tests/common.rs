#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ors() -> Command {
    cargo_bin_cmd!("orarisync")
}

/// Create a unique artifact base dir inside the system temp dir and
/// remove any leftovers from a previous run.
pub fn setup_base(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_orarisync_base", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Create a unique SQLite mirror path and remove any existing file.
pub fn setup_mirror(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_orarisync_mirror.sqlite", name));
    let mirror = path.to_string_lossy().to_string();
    fs::remove_file(&mirror).ok();
    mirror
}

/// Seed the mirror with a small personnel dataset useful for most tests:
/// two exportable employees and one filtered out by store code.
pub fn seed_mirror(mirror: &str) {
    let conn = rusqlite::Connection::open(mirror).expect("open mirror");
    conn.execute_batch(
        "CREATE TABLE Tk_TabDipendenti (
            Codice TEXT PRIMARY KEY,
            Descrizione TEXT,
            Nome TEXT,
            Cognome TEXT,
            RifCommPref TEXT,
            Ore_Sett INTEGER,
            Ore_Lun INTEGER, Ore_Mar INTEGER, Ore_Mer INTEGER,
            Ore_Gio INTEGER, Ore_Ven INTEGER, Ore_Sab INTEGER, Ore_Dom INTEGER,
            Attivo INTEGER
        );
        CREATE TABLE tk_Tab_DettDip (coddip TEXT, da_data_attivo TEXT, a_data_attivo TEXT);
        CREATE TABLE Tk_Tab_LivContDip (CodiceDip TEXT, Livello INTEGER);
        CREATE TABLE gestione_utenti (old_id TEXT);

        INSERT INTO Tk_TabDipendenti VALUES
            ('001', '  Mario   Rossi ', 'Mario', 'Rossi', 'A1', 40, 8, 8, 8, 8, 8, 0, 0, 1),
            ('002', 'Luigi  Verdi', 'Luigi', 'Verdi', 'B2', 36, 8, 8, 8, 8, 4, 0, 0, 1),
            ('003', 'Utente Web', 'Utente', 'Web', 'WEB', 0, 0, 0, 0, 0, 0, 0, 0, 1);
        INSERT INTO tk_Tab_DettDip VALUES
            ('001', '2020-01-01', '2024-12-31'),
            ('002', '2021-05-01', '2025-06-30');
        INSERT INTO Tk_Tab_LivContDip VALUES ('001', 3), ('002', 2);",
    )
    .expect("seed mirror");
}

/// Mark a personnel code as already provisioned on the remote side.
pub fn preprovision(mirror: &str, code: &str) {
    let conn = rusqlite::Connection::open(mirror).expect("open mirror");
    conn.execute("INSERT INTO gestione_utenti (old_id) VALUES (?1)", [code])
        .expect("preprovision code");
}

pub fn roster_dump(base: &PathBuf) -> PathBuf {
    base.join("dump").join("orari.dipendenti.sql")
}

pub fn roster_csv(base: &PathBuf) -> PathBuf {
    base.join("csv").join("orari.dipendenti.csv")
}

pub fn preseed_csv(base: &PathBuf) -> PathBuf {
    base.join("csv").join("nuovi.utenti.csv")
}

pub fn accounts_dump(base: &PathBuf) -> PathBuf {
    base.join("dump").join("orari.gestione_utenti.sql")
}

pub fn accounts_csv(base: &PathBuf) -> PathBuf {
    base.join("csv").join("orari.gestione_utenti.csv")
}
