//! Text and JSON rendering of graph reports.

use std::fmt::Write;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use spanwise_core::GraphReport;

#[derive(Serialize)]
struct JsonOutput<'a> {
    reports: &'a [GraphReport],
}

/// Renders all reports as one pretty-printed JSON document.
pub fn render_json(reports: &[GraphReport]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOutput { reports })?)
}

/// Renders all reports as headed text sections with an edge table each.
pub fn render_text(reports: &[GraphReport]) -> String {
    let mut output = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(output);
        }
        write_section(&mut output, report);
    }
    output
}

fn write_section(output: &mut String, report: &GraphReport) {
    let _ = writeln!(output, "{}", report.kind.heading().bold().underline());
    let _ = writeln!(output, "  {} {}", "Vertices:".cyan(), report.vertex_count);
    let _ = writeln!(output, "  {} {}", "Edges:".cyan(), report.edge_count);

    if !report.edges.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["First vertex", "Second vertex", "Weight"]);
        for edge in &report.edges {
            table.add_row(vec![
                edge.a.to_string(),
                edge.b.to_string(),
                edge.weight.to_string(),
            ]);
        }
        let _ = writeln!(output, "{table}");
    }

    let _ = writeln!(output, "  {} {}", "Diameter:".cyan(), report.diameter);
    let _ = writeln!(
        output,
        "  {} {}",
        "Cost:".cyan(),
        report.total_weight.to_string().green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanwise_core::{Edge, Graph, ReportKind};

    fn sample_reports() -> Vec<GraphReport> {
        let graph = Graph::from_edges(3, vec![Edge::new(0, 1, 4), Edge::new(1, 2, 5)]).unwrap();
        vec![
            GraphReport::from_graph(ReportKind::Original, &graph, true),
            GraphReport::from_graph(ReportKind::Kruskal, &graph, false),
        ]
    }

    #[test]
    fn test_render_text_sections() {
        colored::control::set_override(false);
        let text = render_text(&sample_reports());

        assert!(text.contains("Original graph"));
        assert!(text.contains("Kruskal's algorithm"));
        assert!(text.contains("Vertices: 3"));
        assert!(text.contains("Diameter: 2"));
        assert!(text.contains("Cost: 9"));
        assert_eq!(text.matches("Weight").count(), 1);
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_reports()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let reports = value["reports"].as_array().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["kind"], "original");
        assert_eq!(reports[1]["edges"].as_array().unwrap().len(), 0);
        assert_eq!(reports[1]["total_weight"], 9);
    }
}
