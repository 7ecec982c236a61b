use trellis_codegen::{resolve::ResolvedDashboardView, template::Substitution};

use crate::fragments;

pub(super) fn tokens(view: &ResolvedDashboardView<'_>, tokens: &mut Substitution) {
    tokens
        .set("METRIC_CALCULATIONS", fragments::metric_calculations(view))
        .set("METRIC_WIDGETS", fragments::metric_widgets(view))
        .set("DASHBOARD_WIDGETS", fragments::dashboard_widgets(view));
}
