//! CSV spreadsheet export
//!
//! One sheet of label/value rows with raw, unformatted amounts so the values
//! stay numeric when opened in a spreadsheet application.

use super::{Report, YEAR_LABEL};
use std::io::Write;

pub fn write_spreadsheet<W: Write>(report: &Report, writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([YEAR_LABEL, report.year.to_string().as_str()])?;
    for row in report.report_rows() {
        wtr.write_record([row.label, row.value.normalize().to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::scenario_report;

    fn written() -> String {
        let mut buf = Vec::new();
        write_spreadsheet(&scenario_report(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn raw_values() {
        assert_eq!(
            written(),
            "Rok,2025\n\
             Predajná cena BTC (€),100000\n\
             Nákupná cena (€),10000\n\
             Zdaniteľný zisk (€),90000\n\
             Daň z príjmu (€),19647.78\n\
             Zdravotné odvody (€),11793.6\n\
             Spolu daň + odvody (€),31441.38\n\
             Čistý zisk (€),68558.62\n"
        );
    }

    #[test]
    fn readable_as_csv() {
        let data = written();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(data.as_bytes());
        let records: Vec<csv::StringRecord> = rdr.records().collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 8);
        assert!(records.iter().all(|r| r.len() == 2));
        assert_eq!(&records[6][0], "Spolu daň + odvody (€)");
        assert_eq!(&records[6][1], "31441.38");
    }
}
