//! Stage 1: full roster export.
//!
//! Queries the primary source for the active employees with a real store
//! code, normalizes their display names and writes the dual-format
//! artifact pair.

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{self, Dataset};
use crate::models::roster::{ROSTER_COLUMNS, RosterRecord};
use crate::source;
use crate::stages::ROSTER_STEM;
use crate::ui::messages::info;

pub const ROSTER_QUERY: &str = "\
SELECT
    D.RifCommPref AS Neg,
    D.Descrizione AS NOME,
    D.Ore_Sett,
    D.Codice AS CODICEPERSONALE,
    L.Livello,
    CASE
        WHEN Agg.Max_a_data_attivo = '1900-01-01 00:00:00'
        THEN '2099-12-31'
        ELSE Agg.Max_a_data_attivo
    END AS DATA_ASSUNZIONE,
    Agg.Min_da_data_attivo AS DATA_FINE_CONTRATTO,
    D.Ore_Lun AS Lunedi,
    D.Ore_Mar AS Martedi,
    D.Ore_Mer AS Mercoledi,
    D.Ore_Gio AS Giovedi,
    D.Ore_Ven AS Venerdi,
    D.Ore_Sab AS Sabato,
    D.Ore_Dom AS Domenica
FROM Tk_TabDipendenti AS D
INNER JOIN (
    SELECT
        coddip,
        MIN(da_data_attivo) AS Min_da_data_attivo,
        MAX(a_data_attivo) AS Max_a_data_attivo
    FROM tk_Tab_DettDip
    GROUP BY coddip
) AS Agg
    ON D.Codice = Agg.coddip
INNER JOIN Tk_Tab_LivContDip AS L
    ON D.Codice = L.CodiceDip
WHERE D.Attivo = 1
  AND D.RifCommPref IS NOT NULL
  AND D.RifCommPref <> ''
  AND D.RifCommPref NOT IN ('WEB','AAA','AAAAA')
ORDER BY D.RifCommPref ASC;";

pub const ROSTER_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS dipendenti (
  Neg varchar(10) DEFAULT NULL,
  NOME varchar(100) DEFAULT NULL,
  Ore_Sett int(11) DEFAULT NULL,
  CODICEPERSONALE varchar(20) NOT NULL,
  Livello int(11) DEFAULT NULL,
  DATA_ASSUNZIONE date DEFAULT NULL,
  DATA_FINE_CONTRATTO date DEFAULT NULL,
  Lunedi int(11) DEFAULT 0,
  Martedi int(11) DEFAULT 0,
  Mercoledi int(11) DEFAULT 0,
  Giovedi int(11) DEFAULT 0,
  Venerdi int(11) DEFAULT 0,
  Sabato int(11) DEFAULT 0,
  Domenica int(11) DEFAULT 0,
  PRIMARY KEY (CODICEPERSONALE)
);";

pub fn run(db_override: Option<&str>, cfg: &Config) -> AppResult<()> {
    // Session is scoped to the query: released before any file write.
    let rows = {
        let mut session = source::open_primary(db_override, cfg)?;
        session.execute(ROSTER_QUERY)?
    };
    info(format!("roster query returned {} rows", rows.len()));

    let rows: Vec<_> = rows
        .into_iter()
        .map(|row| RosterRecord::from_row(row).into_values())
        .collect();

    let dataset = Dataset {
        table: "dipendenti",
        schema: ROSTER_SCHEMA,
        columns: &ROSTER_COLUMNS,
        rows,
    };
    export::export_pair(&cfg.base_dir, ROSTER_STEM, &dataset)?;
    Ok(())
}
