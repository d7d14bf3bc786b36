use crate::core::io::traits::StructureFile;
use crate::core::models::atom::AtomRecord;
use crate::core::models::builder::StructureBuilder;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

// Coordinates end at column 54; anything shorter cannot hold an atom.
const MIN_ATOM_LINE_LEN: usize = 54;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbMetadata {
    pub id_code: Option<String>,
    pub title: Option<String>,
    pub skipped_hetatm_records: usize,
    pub models_seen: usize,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

fn parse_int<T: std::str::FromStr>(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
) -> Result<T, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

fn parse_atom_line(line: &str, line_num: usize) -> Result<(AtomRecord, String), PdbError> {
    if line.len() < MIN_ATOM_LINE_LEN {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort,
        });
    }

    let serial: usize = parse_int(line, line_num, 6, 11)?;
    let name = slice_and_trim(line, 12, 16);
    let res_name = slice_and_trim(line, 17, 20);
    let chain_id = slice_and_trim(line, 21, 22).chars().next().unwrap_or(' ');
    let residue_number: isize = parse_int(line, line_num, 22, 26)?;
    let x = parse_float(line, line_num, 30, 38)?;
    let y = parse_float(line, line_num, 38, 46)?;
    let z = parse_float(line, line_num, 46, 54)?;
    let element = slice_and_trim(line, 76, 78);

    if name.is_empty() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::MissingRequiredField {
                columns: "13-16".into(),
            },
        });
    }
    if element.is_empty() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::MissingRequiredField {
                columns: "77-78".into(),
            },
        });
    }

    let mut atom = AtomRecord::new(name, element, residue_number, Point3::new(x, y, z));
    atom.serial = serial;
    atom.chain_id = chain_id;
    atom.residue_name = res_name.to_string();
    Ok((atom, res_name.to_string()))
}

pub struct PdbFile;

impl StructureFile for PdbFile {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Structure, Self::Metadata), Self::Error> {
        let mut builder = StructureBuilder::new();
        let mut metadata = PdbMetadata::default();
        let mut title_parts: Vec<String> = Vec::new();
        let mut atom_count = 0usize;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match slice_and_trim(&line, 0, 6) {
                "ATOM" => {
                    let (atom, res_name) = parse_atom_line(&line, line_num)?;
                    builder.add_atom(atom, &res_name);
                    atom_count += 1;
                }
                "HETATM" => metadata.skipped_hetatm_records += 1,
                "HEADER" => {
                    let id_code = slice_and_trim(&line, 62, 66);
                    if !id_code.is_empty() {
                        metadata.id_code = Some(id_code.to_string());
                    }
                }
                "TITLE" => {
                    let text = slice_and_trim(&line, 10, 80);
                    if !text.is_empty() {
                        title_parts.push(text.to_string());
                    }
                }
                "MODEL" => metadata.models_seen += 1,
                "ENDMDL" | "END" => break,
                _ => {}
            }
        }

        if atom_count == 0 {
            return Err(PdbError::MissingRecord("ATOM records".into()));
        }
        if !title_parts.is_empty() {
            metadata.title = Some(title_parts.join(" "));
        }

        let structure = builder.build();
        debug!(
            atoms = atom_count,
            residues = structure.len(),
            skipped_hetatm = metadata.skipped_hetatm_records,
            "Parsed PDB structure."
        );
        Ok((structure, metadata))
    }
}
