use std::fmt::Write;

use crate::model::metrics::{AnalysisReport, FlyerReport, ScoringReport, SequentialMetrics};
use crate::report::{ReportMeta, format_f64_2};

pub fn render_report_text(report: &AnalysisReport, meta: &ReportMeta) -> String {
    let m = &report.metrics;
    let mut out = String::new();

    out.push_str("Shot Group Analysis Report\n");
    out.push_str("==========================\n");
    let _ = writeln!(out, "Tool: {} {}", meta.tool_name, meta.tool_version);
    let _ = writeln!(out, "Input: {}\n", meta.input);

    out.push_str("1. Group characteristics\n");
    let _ = writeln!(out, "Shots: {}", m.total_shots);
    let _ = writeln!(
        out,
        "MPI: ({}, {})",
        format_f64_2(m.mpi.x),
        format_f64_2(m.mpi.y)
    );
    let _ = writeln!(out, "Extreme spread: {}", format_f64_2(m.extreme_spread));
    let _ = writeln!(out, "Mean radius: {}", format_f64_2(m.mean_radius));
    let _ = writeln!(
        out,
        "Std dev: x={}, y={}",
        format_f64_2(m.std_dev_x),
        format_f64_2(m.std_dev_y)
    );
    let _ = writeln!(out, "Convex hull area: {}", format_f64_2(m.convex_hull_area));
    if let Some(chars) = &report.characteristics {
        for cep in &chars.cep {
            let _ = writeln!(
                out,
                "CEP{:.0}: {}",
                cep.probability * 100.0,
                format_f64_2(cep.radius)
            );
        }
        if chars.figure_of_merit > 0.0 {
            let _ = writeln!(out, "Figure of merit: {}", format_f64_2(chars.figure_of_merit));
        }
        if let Some(ci) = &chars.confidence_intervals {
            let _ = writeln!(
                out,
                "{:.0}% CI: x=[{}, {}], y=[{}, {}]",
                ci.level * 100.0,
                format_f64_2(ci.x.lower),
                format_f64_2(ci.x.upper),
                format_f64_2(ci.y.lower),
                format_f64_2(ci.y.upper)
            );
        }
    }
    out.push('\n');

    out.push_str("2. Flyers\n");
    out.push_str(&flyer_section(&report.flyers));
    out.push('\n');

    out.push_str("3. Progression\n");
    match &report.sequential {
        Some(seq) => out.push_str(&sequential_section(seq)),
        None => out.push_str("Not enough shots for progression analysis.\n"),
    }
    out.push('\n');

    out.push_str("4. Scoring\n");
    match &report.scoring {
        Some(scoring) => out.push_str(&scoring_section(scoring)),
        None => out.push_str("No scoring target supplied.\n"),
    }

    out
}

fn flyer_section(flyers: &FlyerReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Method: {} (threshold {})",
        flyers.method,
        format_f64_2(flyers.threshold)
    );
    if !flyers.evaluated {
        out.push_str("Group too small for flyer detection; all shots accepted.\n");
        return out;
    }
    let _ = writeln!(out, "Flyers: {}", flyers.flyer_count());
    for &i in &flyers.rejected {
        let _ = writeln!(
            out,
            "  shot #{} criterion {}",
            i + 1,
            format_f64_2(flyers.criteria[i])
        );
    }
    out
}

fn sequential_section(seq: &SequentialMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "First-shot displacement: {}",
        format_f64_2(seq.first_shot_displacement)
    );
    let _ = writeln!(
        out,
        "Shot-to-shot displacement: mean={}, min={}, max={}, std={}",
        format_f64_2(seq.shot_to_shot_displacement),
        format_f64_2(seq.min_shot_displacement),
        format_f64_2(seq.max_shot_displacement),
        format_f64_2(seq.shot_displacement_std)
    );
    let _ = writeln!(
        out,
        "Trend stability: {} ({})",
        format_f64_2(seq.trend_stability),
        trend_statement(seq.trend_stability)
    );
    out
}

fn scoring_section(scoring: &ScoringReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total: {}  Average: {}  Best: {}  Worst: {}",
        scoring.total_score,
        format_f64_2(scoring.average_score),
        scoring.max_score,
        scoring.min_score
    );
    for (ring, count) in scoring.hit_distribution[..scoring.ring_count]
        .iter()
        .enumerate()
    {
        let _ = writeln!(
            out,
            "  ring {} ({} pts): {}",
            ring + 1,
            scoring.ring_count - ring,
            count
        );
    }
    let _ = writeln!(out, "  miss: {}", scoring.miss_count);
    out
}

fn trend_statement(stability: f64) -> &'static str {
    if stability >= 0.8 {
        "strongly linear progression"
    } else if stability >= 0.4 {
        "partly linear progression"
    } else {
        "irregular progression"
    }
}
