use clap::Parser;
use garoo_admin::{browse, cli, config, error, export, provider, store, view};
use garoo_admin_common::directory::FetchError;
use garoo_admin_common::{GalleryState, WorkerDirectory, EXPORT_ERROR_MESSAGE};
use cli::{Cli, Commands};
use config::Config;
use error::{AdminError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "garoo_admin={lvl},garoo_admin_common={lvl}",
                lvl = default_level
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// 保存済みデータを読み、検索語を適用した状態を作る
fn load_directory(path: &std::path::Path, search: Option<String>) -> Result<WorkerDirectory> {
    let mut dir = WorkerDirectory::with_records(store::load_workers(path)?);
    if let Some(term) = search {
        dir.set_search_term(term);
    }
    Ok(dir)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let data_file = cli.data.clone().unwrap_or_else(|| config.data_file.clone());

    match cli.command {
        Commands::Fetch { source, output } => {
            println!("📥 garoo-admin - Actualizar datos\n");

            let target = output.unwrap_or(data_file);
            let provider = provider::from_source(source.as_deref(), &config)?;
            let mut dir = WorkerDirectory::with_records(store::load_existing(&target)?);

            // 新しく作った状態なので取得中にはなっていない
            dir.begin_fetch();
            println!("- Procesando... ({})", provider.describe());
            let result = provider
                .trigger()
                .await
                .map_err(|e| FetchError::new(e.to_string()));
            dir.finish_fetch(result);

            if let Some(err) = dir.error() {
                // 既存データはそのまま
                eprintln!("✖ Error: {}", err);
                return Err(AdminError::Webhook(err.message.clone()));
            }

            store::save_workers(&target, dir.records())?;
            println!("✔ {}", dir.result_count_label());
            println!("✔ Guardado: {}", target.display());
        }

        Commands::List { search, raw } => {
            let dir = load_directory(&data_file, search)?;
            if raw {
                println!("{}", dir.raw_json()?);
            } else {
                println!("{}\n", dir.result_count_label());
                println!("{}", view::render_table(&dir.rows()));
            }
        }

        Commands::Show { selector, search } => {
            let dir = load_directory(&data_file, search)?;
            let record = dir
                .find(&selector)
                .ok_or_else(|| AdminError::WorkerNotFound(selector.clone()))?;
            println!("{}", view::render_detail(record));
        }

        Commands::Export { selector, all, search, output } => {
            println!("📄 garoo-admin - Exportar PDF\n");

            let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
            let dir = load_directory(&data_file, search)?;
            let now = chrono::Local::now().naive_local();

            let targets = if all {
                dir.filtered()
            } else {
                let selector = selector.unwrap_or_default();
                let record = dir
                    .find(&selector)
                    .ok_or_else(|| AdminError::WorkerNotFound(selector.clone()))?;
                vec![record]
            };
            if targets.is_empty() {
                return Err(AdminError::NoWorkers(dir.result_count_label()));
            }

            let pb = ProgressBar::new(targets.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:30} {pos}/{len} {msg}")
                    .map_err(|e| AdminError::Config(e.to_string()))?,
            );

            let mut failed = 0usize;
            for record in targets {
                match export::export_worker(record, &output_dir, now) {
                    Ok(report) => {
                        pb.println(format!("✔ {}", report.path.display()));
                        for s in &report.skipped {
                            pb.println(format!("  ⚠ Sección omitida: {} ({})", s.title, s.reason));
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "export failed");
                        pb.println(EXPORT_ERROR_MESSAGE);
                        failed += 1;
                    }
                }
                pb.inc(1);
            }
            pb.finish_and_clear();

            if failed > 0 {
                return Err(AdminError::PdfGeneration(format!("{} exportaciones fallidas", failed)));
            }
            println!("\n✅ Exportación completada");
        }

        Commands::Browse { output } => {
            let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
            let mut dir = load_directory(&data_file, None)?;
            browse::run_browse(&mut dir, &output_dir)?;
        }

        Commands::Gallery { open } => {
            let mut state = GalleryState::default();
            if let Some(n) = open {
                if !n.checked_sub(1).map(|i| state.open(i)).unwrap_or(false) {
                    println!("⚠ Imagen {} no existe", n);
                }
            }
            println!("{}", view::render_gallery(&state));
        }

        Commands::Config { set_webhook_url, show } => {
            let mut config = config;

            if let Some(url) = set_webhook_url {
                config.set_webhook_url(url)?;
                println!("✔ URL del webhook guardada");
            }

            if show {
                println!("Configuración:");
                println!(
                    "  Webhook: {}",
                    config.webhook_url().unwrap_or_else(|_| "no configurado".to_string())
                );
                println!("  Tiempo de espera: {}s", config.timeout_seconds);
                println!("  Archivo de datos: {}", config.data_file.display());
                println!("  Carpeta de salida: {}", config.output_dir.display());
            }
        }
    }

    Ok(())
}
