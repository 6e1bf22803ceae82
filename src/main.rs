use clap::Parser;
use gesture_autolink::domain::model::PatchReport;
use gesture_autolink::utils::logger;
use gesture_autolink::{CliConfig, InstallEngine, LocalStorage, PatchStatus, TargetConfig};

fn print_report(report: &PatchReport) {
    match report.status {
        PatchStatus::Unchanged => println!("✅ {} already set up", report.file.display()),
        PatchStatus::Patched => println!("✅ Patched {}", report.file.display()),
        PatchStatus::WouldPatch => println!("📝 Would patch {}", report.file.display()),
    }
    for line in &report.inserted {
        tracing::debug!("{}: inserted {:?}", report.step, line);
    }
}

fn main() {
    let config = CliConfig::parse();

    logger::init_from_env(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let start = match config.start_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("❌ Cannot resolve start directory: {}", e);
            std::process::exit(1);
        }
    };

    let engine = InstallEngine::new(LocalStorage::new(), TargetConfig::default())
        .with_dry_run(config.dry_run);

    match engine.run(&start) {
        Ok(report) => {
            println!("📁 Project root: {}", report.root.display());
            print_report(&report.entry);
            print_report(&report.activity);
            if !report.entry.changed() && !report.activity.changed() {
                tracing::info!("Nothing to do");
            }
        }
        Err(e) => {
            tracing::error!("❌ Install failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
