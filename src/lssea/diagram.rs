//! Text diagram rendering
//!
//! Renders an extracted batch as a box-and-line tree, one block per host:
//!
//! ```text
//! HOSTNAME: vios1a
//! ------------------------------
//!
//! SEA 1: ent5
//!   └── ETHERCHANNEL: ent0, ent1
//!   └── REAL ADAPTERS:
//!       ├── ent0 (U78CB.001.WZS0043-P1-C6-T1)
//!   └── VIRTUAL ADAPTERS:
//!       ├── ent4 (U8286.41A.21FD4BV-V1-C2-T1)
//! ```
//!
//! Empty sub-sections are omitted rather than rendered as empty branches.

use crate::lssea::model::HostConfig;

/// Render a batch of host configurations as a text diagram.
pub fn render_text_diagram(configs: &[HostConfig]) -> String {
    let mut diagram = DiagramWriter::new();

    diagram.line("NETWORK CONFIGURATION DIAGRAM");
    diagram.rule('=', 50);
    diagram.blank();

    for config in configs {
        let hostname = config.hostname.as_deref().unwrap_or("Unknown");
        diagram.line(&format!("HOSTNAME: {}", hostname));
        diagram.rule('-', 30);
        diagram.blank();

        for (i, sea) in config.sea_sections.iter().enumerate() {
            diagram.line(&format!("SEA {}: {}", i + 1, sea.sea_name));

            if let Some(group) = &sea.etherchannel {
                if !group.adapters.is_empty() {
                    diagram.branch(&format!("ETHERCHANNEL: {}", group.adapters.join(", ")));
                }
            }

            if !sea.real_adapters.is_empty() {
                diagram.branch("REAL ADAPTERS:");
                for adapter in &sea.real_adapters {
                    diagram.leaf(&format!(
                        "{} ({})",
                        adapter.adapter_name, adapter.hardware_path
                    ));
                }
            }

            if !sea.virtual_adapters.is_empty() {
                diagram.branch("VIRTUAL ADAPTERS:");
                for adapter in &sea.virtual_adapters {
                    diagram.leaf(&format!(
                        "{} ({})",
                        adapter.adapter_name, adapter.hardware_path
                    ));
                }
            }

            diagram.blank();
        }
    }

    diagram.finish()
}

/// Small line-oriented string builder for the tree output
struct DiagramWriter {
    output: String,
}

impl DiagramWriter {
    fn new() -> Self {
        DiagramWriter {
            output: String::new(),
        }
    }

    fn line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn rule(&mut self, ch: char, width: usize) {
        self.line(&ch.to_string().repeat(width));
    }

    fn blank(&mut self) {
        self.output.push('\n');
    }

    fn branch(&mut self, text: &str) {
        self.line(&format!("  └── {}", text));
    }

    fn leaf(&mut self, text: &str) {
        self.line(&format!("      ├── {}", text));
    }

    fn finish(self) -> String {
        self.output
    }
}
