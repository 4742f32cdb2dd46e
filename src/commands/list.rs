//! List command handler
//!
//! Prints every target with the commands it would run under the current
//! settings.

use qdii_deploy::config::LoadedConfig;
use qdii_deploy::presentation::output::target_list_json;
use qdii_deploy::plan_all;

use crate::ui::context::UiContext;
use crate::ui::views::targets::TargetsView;

pub fn cmd_list(loaded: &LoadedConfig, ui: &UiContext) {
    let plans = plan_all(&loaded.config);
    let source = loaded.source.as_deref();

    if ui.json {
        println!("{}", target_list_json(&plans, source));
        return;
    }

    print!("{}", TargetsView::new(&plans, source).render(ui.color, ui.unicode));
}
