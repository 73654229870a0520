use serde::Serialize;

use crate::data::extract::{extract_records, ColumnRoles, SurveyRecord};
use crate::data::group::group_by_species;
use crate::data::model::SurveyDataset;
use crate::error::Result;
use crate::metrics::condition::{mean_relative_weight, relative_weight, standard_weight};
use crate::metrics::cpue::{cpue_table, CpueRow};
use crate::metrics::effort::total_effort;
use crate::metrics::frequency::{length_frequency, LengthBin, DEFAULT_BIN_COUNT};
use crate::metrics::psd::{psd, PsdValues};
use crate::metrics::regression::{length_weight_regression, RegressionResult};
use crate::species::SpeciesTable;

const MM_PER_INCH: f64 = 25.4;

// ---------------------------------------------------------------------------
// Result tables
// ---------------------------------------------------------------------------

/// One row of the species abundance/condition table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbundanceRow {
    pub species: String,
    pub fish_count: u64,
    /// Fish per hour of sampling effort.
    pub cpue: f64,
    pub mean_length_mm: Option<f64>,
    /// Mean total length in inches, for the report layer.
    pub mean_length_in: Option<f64>,
    pub min_length_mm: Option<f64>,
    pub max_length_mm: Option<f64>,
    pub mean_weight_g: Option<f64>,
    pub min_weight_g: Option<f64>,
    pub max_weight_g: Option<f64>,
    /// Mean Wr over rows where it is defined; 0.0 when it never is.
    pub mean_relative_weight: f64,
    pub psd: PsdValues,
}

/// One row of the PSD table. Only species with reference length categories
/// appear; a size distribution is meaningless without cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PsdRow {
    pub species: String,
    /// Number of stock-length fish the percentages are relative to.
    pub stock_count: u64,
    pub values: PsdValues,
}

/// The combined output of one engine run, ready for the report/export
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyReport {
    pub total_effort_hours: f64,
    pub cpue: Vec<CpueRow>,
    pub abundance: Vec<AbundanceRow>,
    pub psd: Vec<PsdRow>,
    /// `None` when fewer than two valid length/weight pairs exist; the
    /// rest of the report is still valid in that case.
    pub length_weight: Option<RegressionResult>,
    pub length_frequency: Vec<LengthBin>,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The fisheries metrics engine.
///
/// Owns only the immutable species reference table; every computation is a
/// pure function of the dataset and role mapping passed in, recomputed from
/// scratch on each call.
#[derive(Debug, Clone)]
pub struct FisheriesMetricsEngine {
    species: SpeciesTable,
}

impl Default for FisheriesMetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed records plus the per-row derived condition column.
///
/// Standard and relative weight are derived once per row here, then
/// aggregated; no metric recomputes them inside a per-species loop.
struct Prepared {
    records: Vec<SurveyRecord>,
    relative_weights: Vec<Option<f64>>,
}

impl FisheriesMetricsEngine {
    /// Engine with the built-in reference table.
    pub fn new() -> Self {
        Self {
            species: SpeciesTable::reference(),
        }
    }

    /// Engine with a caller-supplied reference table.
    pub fn with_species_table(species: SpeciesTable) -> Self {
        Self { species }
    }

    pub fn species_table(&self) -> &SpeciesTable {
        &self.species
    }

    /// CPUE table for the dataset.
    pub fn cpue(&self, dataset: &SurveyDataset, roles: &ColumnRoles) -> Result<Vec<CpueRow>> {
        let records = extract_records(dataset, roles)?;
        let effort = total_effort(&records)?;
        Ok(cpue_table(&records, effort))
    }

    /// Species abundance/condition table, sorted descending by CPUE.
    pub fn abundance(
        &self,
        dataset: &SurveyDataset,
        roles: &ColumnRoles,
    ) -> Result<Vec<AbundanceRow>> {
        let prepared = self.prepare(dataset, roles)?;
        let effort = total_effort(&prepared.records)?;
        Ok(self.abundance_rows(&prepared, effort))
    }

    /// PSD table for every surveyed species with reference categories.
    pub fn psd_table(&self, dataset: &SurveyDataset, roles: &ColumnRoles) -> Result<Vec<PsdRow>> {
        let records = extract_records(dataset, roles)?;
        Ok(self.psd_rows(&records))
    }

    /// Length-weight regression over the whole dataset.
    pub fn length_weight(
        &self,
        dataset: &SurveyDataset,
        roles: &ColumnRoles,
    ) -> Result<RegressionResult> {
        let records = extract_records(dataset, roles)?;
        regression_over(&records)
    }

    /// Length-frequency distribution over the whole dataset.
    pub fn length_frequency(
        &self,
        dataset: &SurveyDataset,
        roles: &ColumnRoles,
        bin_count: usize,
    ) -> Result<Vec<LengthBin>> {
        let records = extract_records(dataset, roles)?;
        let lengths: Vec<f64> = records.iter().filter_map(|r| r.length_mm).collect();
        Ok(length_frequency(&lengths, bin_count))
    }

    /// Run every computation and assemble the full report.
    ///
    /// Fails only on a missing column or invalid total effort; an
    /// unfittable regression degrades to `None` since the other tables
    /// remain meaningful.
    pub fn analyze(&self, dataset: &SurveyDataset, roles: &ColumnRoles) -> Result<SurveyReport> {
        let prepared = self.prepare(dataset, roles)?;
        let effort = total_effort(&prepared.records)?;

        let cpue = cpue_table(&prepared.records, effort);
        let abundance = self.abundance_rows(&prepared, effort);
        let psd = self.psd_rows(&prepared.records);

        let length_weight = match regression_over(&prepared.records) {
            Ok(fit) => Some(fit),
            Err(e) => {
                log::warn!("length-weight regression skipped: {e}");
                None
            }
        };

        let lengths: Vec<f64> = prepared.records.iter().filter_map(|r| r.length_mm).collect();
        let length_frequency = length_frequency(&lengths, DEFAULT_BIN_COUNT);

        log::debug!(
            "analyzed {} records across {} species",
            prepared.records.len(),
            cpue.len()
        );

        Ok(SurveyReport {
            total_effort_hours: effort,
            cpue,
            abundance,
            psd,
            length_weight,
            length_frequency,
        })
    }

    /// Extract typed records and derive the per-row condition column.
    fn prepare(&self, dataset: &SurveyDataset, roles: &ColumnRoles) -> Result<Prepared> {
        let records = extract_records(dataset, roles)?;
        let relative_weights = records
            .iter()
            .map(|r| {
                let ws = self
                    .species
                    .ws(&r.species)
                    .zip(r.length_mm)
                    .and_then(|(params, length)| standard_weight(params, length));
                relative_weight(r.weight_g, ws)
            })
            .collect();
        Ok(Prepared {
            records,
            relative_weights,
        })
    }

    fn abundance_rows(&self, prepared: &Prepared, effort: f64) -> Vec<AbundanceRow> {
        let mut rows: Vec<AbundanceRow> = group_by_species(&prepared.records)
            .into_iter()
            .map(|(species, indices)| {
                let lengths: Vec<f64> = indices
                    .iter()
                    .filter_map(|&i| prepared.records[i].length_mm)
                    .collect();
                let weights: Vec<f64> = indices
                    .iter()
                    .filter_map(|&i| prepared.records[i].weight_g)
                    .collect();

                let psd_values = self
                    .species
                    .categories(&species)
                    .map(|cats| psd(&lengths, cats).1)
                    .unwrap_or_default();

                let mean_length_mm = mean(&lengths);
                AbundanceRow {
                    fish_count: indices.len() as u64,
                    cpue: indices.len() as f64 / effort,
                    mean_length_mm,
                    mean_length_in: mean_length_mm.map(|mm| mm / MM_PER_INCH),
                    min_length_mm: min(&lengths),
                    max_length_mm: max(&lengths),
                    mean_weight_g: mean(&weights),
                    min_weight_g: min(&weights),
                    max_weight_g: max(&weights),
                    mean_relative_weight: mean_relative_weight(
                        indices.iter().map(|&i| prepared.relative_weights[i]),
                    ),
                    psd: psd_values,
                    species,
                }
            })
            .collect();

        // Reporting contract: strictly descending CPUE, deterministic ties.
        rows.sort_by(|a, b| {
            b.fish_count
                .cmp(&a.fish_count)
                .then_with(|| a.species.cmp(&b.species))
        });
        rows
    }

    fn psd_rows(&self, records: &[SurveyRecord]) -> Vec<PsdRow> {
        group_by_species(records)
            .into_iter()
            .filter_map(|(species, indices)| {
                let cats = self.species.categories(&species)?;
                let lengths: Vec<f64> = indices
                    .iter()
                    .filter_map(|&i| records[i].length_mm)
                    .collect();
                let (stock_count, values) = psd(&lengths, cats);
                Some(PsdRow {
                    species,
                    stock_count,
                    values,
                })
            })
            .collect()
    }
}

fn regression_over(records: &[SurveyRecord]) -> Result<RegressionResult> {
    let lengths: Vec<f64> = records
        .iter()
        .map(|r| r.length_mm.unwrap_or(f64::NAN))
        .collect();
    let weights: Vec<f64> = records
        .iter()
        .map(|r| r.weight_g.unwrap_or(f64::NAN))
        .collect();
    length_weight_regression(&lengths, &weights)
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn min(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().cloned().fold(f64::INFINITY, f64::min))
    }
}

fn max(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().cloned().fold(f64::NEG_INFINITY, f64::max))
    }
}
