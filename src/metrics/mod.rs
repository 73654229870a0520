/// Metrics layer: the standard fisheries computations.
///
/// Every function here is a pure function of its inputs: no caching, no
/// mutation, no cross-call state. Per-species reference gaps degrade to
/// undefined values; only effort ≤ 0 and an unfittable regression abort.
///
/// * [`effort`] – total sampling hours, deduplicated by sample unit
/// * [`cpue`] – catch per unit effort per species
/// * [`condition`] – standard weight (Ws) and relative weight (Wr)
/// * [`psd`] – proportional size distribution
/// * [`frequency`] – length-frequency histogram bins
/// * [`regression`] – log10–log10 length-weight fit

pub mod condition;
pub mod cpue;
pub mod effort;
pub mod frequency;
pub mod psd;
pub mod regression;
