//! # drc21
//!
//! Batch design-rule-check driver: rectangle-list layout and JSON rule
//! table in, line diagnostics and a CSV fail-table out.
//!

use clap::Parser;
use std::error::Error;

use drc21::{read_layout, report, run_all, DrcError, Int, LayerIndex, Rect, RuleTable};

// => The doc-comment on `ProgramOptions` here is displayed by the `clap`-generated help docs =>

/// Rectangle-Based Layout Design-Rule Checker
#[derive(Parser)]
struct ProgramOptions {
    /// Layout rectangle-list input file
    #[clap(short = 'i', long, default_value = "layout.txt")]
    layout: String,
    /// Rule configuration file (JSON)
    #[clap(short, long, default_value = "rules.json")]
    rules: String,
    /// Die bounding box for the density check, as `x1,y1,x2,y2`
    #[clap(short, long, default_value = "0,0,200,100")]
    die: String,
    /// Diagnostic report output file
    #[clap(short = 'o', long, default_value = "drc_report.txt")]
    report: String,
    /// CSV fail-table output file
    #[clap(short, long, default_value = "drc_fail_table.csv")]
    table: String,
    /// Also report enclosure over-coverage notes
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let options = ProgramOptions::parse();
    _main(&options)
}

fn _main(options: &ProgramOptions) -> Result<(), Box<dyn Error>> {
    // Configuration failures are fatal, before any check runs
    let rules = RuleTable::open(&options.rules)?;
    let die = parse_die(&options.die)?;

    // Layout failures are not: an unreadable file checks as empty
    let shapes = read_layout(&options.layout);
    println!("Loaded {} shapes", shapes.len());

    let index = LayerIndex::build(&shapes);
    let violations = run_all(&shapes, &index, &rules, &die, options.verbose);

    // Echo diagnostics, then save both renderings
    let stdout = std::io::stdout();
    report::write_diagnostics(&mut stdout.lock(), &violations)?;
    report::save_diagnostics(&options.report, &violations)?;
    println!("DRC results saved to {}", options.report);
    report::save_table(&options.table, &violations)?;
    println!("DRC table saved to {}", options.table);

    if options.verbose {
        println!(
            "{} records, {} failing",
            violations.len(),
            violations.fail_count()
        );
    }
    Ok(())
}

/// Parse an `x1,y1,x2,y2` die bounding box
fn parse_die(s: &str) -> Result<Rect, DrcError> {
    let coords: Vec<Int> = s
        .split(',')
        .map(|t| t.trim().parse::<Int>())
        .collect::<Result<_, _>>()
        .map_err(|e| DrcError::config(format!("die box {:?}: {}", s, e)))?;
    match coords[..] {
        [x1, y1, x2, y2] => Ok(Rect::new(x1, y1, x2, y2)),
        _ => Err(DrcError::config(format!(
            "die box {:?}: expected x1,y1,x2,y2",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_box_parses() {
        let die = parse_die("0,0,200,100").unwrap();
        assert_eq!(die, Rect::new(0, 0, 200, 100));
        assert!(parse_die("0,0,200").is_err());
        assert!(parse_die("zero,0,200,100").is_err());
    }

    #[test]
    fn end_to_end_over_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let layout = dir.path().join("layout.txt");
        std::fs::write(&layout, "M1 0 0 1 5\nM1 0 8 10 10\n").unwrap();
        let rules = dir.path().join("rules.json");
        std::fs::write(
            &rules,
            r#"{
                "min_spacing": {"M1": 5},
                "min_width": {"M1": 2},
                "max_width": {"M1": 100},
                "density_check": {"window_size": 10, "min_density": 0.5}
            }"#,
        )
        .unwrap();
        let report = dir.path().join("drc_report.txt");
        let table = dir.path().join("drc_fail_table.csv");

        let options = ProgramOptions {
            layout: layout.to_string_lossy().into_owned(),
            rules: rules.to_string_lossy().into_owned(),
            die: "0,0,10,10".to_string(),
            report: report.to_string_lossy().into_owned(),
            table: table.to_string_lossy().into_owned(),
            verbose: false,
        };
        _main(&options).unwrap();

        let csv = std::fs::read_to_string(&table).unwrap();
        assert!(csv.starts_with("type,layer,object,bbox,rule,actual,delta,status\n"));
        assert!(csv.contains("WIDTH,M1,idx=0"));
        assert!(csv.contains("SPACING,M1,\"(0,1)\""));
        let diag = std::fs::read_to_string(&report).unwrap();
        assert!(diag.contains("[WIDTH][M1] idx=0"));
    }

    #[test]
    fn missing_rules_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let options = ProgramOptions {
            layout: "layout.txt".to_string(),
            rules: dir.path().join("no_such_rules.json").to_string_lossy().into_owned(),
            die: "0,0,10,10".to_string(),
            report: "r.txt".to_string(),
            table: "t.csv".to_string(),
            verbose: false,
        };
        assert!(_main(&options).is_err());
    }
}
