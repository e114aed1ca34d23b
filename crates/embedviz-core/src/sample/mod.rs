//! Stratified sampling of point indices.

use std::collections::BTreeMap;

use rand_chacha::ChaCha8Rng;

use crate::error::{VizError, VizResult};
use crate::types::Label;


/// Select a balanced random subset of indices, `quota` per unique label.
///
/// With `quota = None` the identity policy applies: every index is selected
/// in order (`0..labels.len()`) and the RNG is not consumed. With
/// `quota = Some(q)`, `q` positions are drawn uniformly without replacement
/// from exactly the positions holding each label.
///
/// The result is grouped by label in ascending label order, the same
/// canonical order the color assigner uses. Callers must not assume input
/// order is preserved, and must re-index every per-point array through the
/// returned sequence before rendering.
///
/// # Errors
///
/// `InsufficientData` when any label's population is smaller than `quota`;
/// sampling with replacement is never substituted.
pub fn sample_per_label(
    labels: &[Label],
    quota: Option<usize>,
    rng: &mut ChaCha8Rng,
) -> VizResult<Vec<usize>> {
    let Some(quota) = quota else {
        return Ok((0..labels.len()).collect());
    };

    let mut positions: BTreeMap<Label, Vec<usize>> = BTreeMap::new();
    for (i, &label) in labels.iter().enumerate() {
        positions.entry(label).or_default().push(i);
    }

    let mut picked = Vec::with_capacity(positions.len() * quota);
    for (&label, members) in &positions {
        if members.len() < quota {
            return Err(VizError::InsufficientData {
                label,
                requested: quota,
                available: members.len(),
            });
        }
        let draws = rand::seq::index::sample(rng, members.len(), quota).into_vec();
        picked.extend(draws.into_iter().map(|d| members[d]));
    }
    Ok(picked)
}
