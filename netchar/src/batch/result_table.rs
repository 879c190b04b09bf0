use crate::{
    errors::GraphError,
    summary::measure_row::{Measure, MeasureRow},
};
use indexmap::IndexMap;
use std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::Write,
    path::Path,
};

/// The statistics of every processed graph: one row per file, in processing order, one column
/// per [Measure].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: IndexMap<String, MeasureRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, file: String, row: MeasureRow) {
        self.rows.insert(file, row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &'static [Measure] {
        &Measure::ALL
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(|f| f.as_str())
    }

    pub fn get(&self, file: &str) -> Option<&MeasureRow> {
        self.rows.get(file)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &MeasureRow)> {
        self.rows.iter().map(|(f, r)| (f.as_str(), r))
    }

    /// Every file's value for one statistic, in row order.
    pub fn column(&self, measure: Measure) -> Vec<f64> {
        self.rows
            .values()
            .map(|row| row.get(measure).unwrap_or(f64::NAN))
            .collect()
    }

    /// A printable view of the first `rows` rows.
    pub fn head(&self, rows: usize) -> TablePreview<'_> {
        TablePreview { table: self, rows }
    }

    /// Write the whole table as CSV, file names in the first column.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), GraphError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(
            std::iter::once("file").chain(self.columns().iter().map(|m| m.name())),
        )?;
        for (file, row) in self.rows() {
            let values = self
                .columns()
                .iter()
                .map(|m| row.get(*m).unwrap_or(f64::NAN).to_string());
            writer.write_record(std::iter::once(file.to_string()).chain(values))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), GraphError> {
        self.write_csv(File::create(path)?)
    }
}

pub struct TablePreview<'a> {
    table: &'a ResultTable,
    rows: usize,
}

impl Display for TablePreview<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let columns = self.table.columns();
        let cells: Vec<(&str, Vec<String>)> = self
            .table
            .rows()
            .take(self.rows)
            .map(|(file, row)| {
                let values = columns
                    .iter()
                    .map(|m| format_value(row.get(*m).unwrap_or(f64::NAN)))
                    .collect();
                (file, values)
            })
            .collect();

        let file_width = cells.iter().map(|(file, _)| file.len()).max().unwrap_or(0);
        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, m)| {
                cells
                    .iter()
                    .map(|(_, values)| values[i].len())
                    .chain(std::iter::once(m.name().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:file_width$}", "")?;
        for (m, &width) in columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", m.name())?;
        }
        for (file, values) in &cells {
            write!(f, "\n{file:<file_width$}")?;
            for (value, &width) in values.iter().zip(&widths) {
                write!(f, "  {value:>width$}")?;
            }
        }
        if self.table.len() > self.rows {
            write!(f, "\n[{} rows x {} columns]", self.table.len(), columns.len())?;
        }
        Ok(())
    }
}

fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value:.6}")
    }
}
