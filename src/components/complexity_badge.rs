//! Complexity Badge Component

use leptos::prelude::*;

use crate::models::ComplexityTier;
use crate::plan::complexity_label;

/// Score badge colored by its tier
#[component]
pub fn ComplexityBadge(tier: ComplexityTier, score: i32) -> impl IntoView {
    view! {
        <span class=tier.css_class() data-tier=tier.as_str()>
            {complexity_label(score)}
        </span>
    }
}
