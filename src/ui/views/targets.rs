use std::path::Path;

use qdii_deploy::TargetPlan;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, strong, Tone};

pub struct TargetsView<'a> {
    plans: &'a [TargetPlan],
    config_source: Option<&'a Path>,
}

impl<'a> TargetsView<'a> {
    pub fn new(plans: &'a [TargetPlan], config_source: Option<&'a Path>) -> Self {
        Self {
            plans,
            config_source,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        out.push_str(&strong("Targets", supports_color));
        out.push('\n');

        for plan in self.plans {
            out.push_str(&format!(
                "  {} {}\n",
                strong(&format!("{:<6}", plan.target.as_str()), supports_color),
                plan.description
            ));
            for line in plan.command_lines() {
                out.push_str(&format!(
                    "         {} {}\n",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    paint(&line, Tone::Dim, supports_color)
                ));
            }
        }

        let source = match self.config_source {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        };
        out.push('\n');
        out.push_str(&paint(
            &format!("Settings: {}", source),
            Tone::Dim,
            supports_color,
        ));
        out.push('\n');

        out
    }
}
