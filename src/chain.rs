//! Chain-color resolution against the virtual selected chain
//!
//! A block is blue only if one of its children was added to the selected
//! chain. It is red if, in addition, the block itself was removed from it.

use crate::types::*;
use tracing::{debug, warn};

/// ResolveColor: ℬ × Δ → 𝒞
///
/// For block b with children cs and chain delta (added, removed):
/// 1. Find the first c ∈ cs with c ∈ added (children order decides)
/// 2. If found: verdict = Orphaned if b.hash ∈ removed, else Accepted
/// 3. Otherwise: verdict = Undetermined, no authoritative child
///
/// More than one added child breaks the one-chain-child assumption; the
/// first match is still returned and the anomaly is logged.
pub fn resolve_chain_color(block: &Block, delta: &ChainDelta) -> ChainColor {
    let mut matches = block
        .children_hashes
        .iter()
        .filter(|child| delta.added_hashes.contains(child));

    let Some(&child) = matches.next() else {
        debug!(block = %block.hash, "no child of the block is on the selected chain");
        return ChainColor::undetermined();
    };

    let extra: Vec<&Hash> = matches.collect();
    if !extra.is_empty() {
        warn!(
            block = %block.hash,
            chosen = %child,
            others = ?extra,
            "more than one child was added to the selected chain, using the first"
        );
    }

    let verdict = if delta.removed_hashes.contains(&block.hash) {
        ColorVerdict::Orphaned
    } else {
        ColorVerdict::Accepted
    };

    ChainColor {
        verdict,
        authoritative_child: Some(child),
    }
}

impl Block {
    pub fn chain_color(&self, delta: &ChainDelta) -> ChainColor {
        resolve_chain_color(self, delta)
    }
}
