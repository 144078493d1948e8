use anyhow::{Result, bail};
use applog_analysis::applog::{AnalysisResult, EntryFilter};
use applog_analysis::config::Config;
use applog_analysis::exporter::ExportStats;
use applog_analysis::process::process_log_file;
use std::path::PathBuf;

/// 命令行参数
#[derive(Debug, Default)]
struct CliArgs {
    log_file: Option<PathBuf>,
    config: Option<PathBuf>,
    filter: EntryFilter,
    pretty: bool,
    log_level: Option<String>,
    no_log: bool,
}

impl CliArgs {
    /// 从命令行参数解析
    fn from_args<I: Iterator<Item = String>>(args: I) -> Result<Self> {
        let mut cli = Self::default();
        for arg in args {
            if arg == "--no-log" {
                cli.no_log = true;
            } else if arg == "--pretty" {
                cli.pretty = true;
            } else if let Some(path) = arg.strip_prefix("--config=") {
                cli.config = Some(PathBuf::from(path));
            } else if let Some(screen) = arg.strip_prefix("--screen=") {
                cli.filter = cli.filter.screen(screen);
            } else if let Some(kind) = arg.strip_prefix("--kind=") {
                cli.filter = cli.filter.kind(kind);
            } else if let Some(keyword) = arg.strip_prefix("--keyword=") {
                cli.filter = cli.filter.keyword(keyword);
            } else if let Some(level) = arg.strip_prefix("--log-level=") {
                cli.log_level = Some(level.to_string());
            } else if arg.starts_with("--") {
                bail!("未知参数: {arg}");
            } else if cli.log_file.is_none() {
                cli.log_file = Some(PathBuf::from(arg));
            } else {
                bail!("只能指定一个日志文件: {arg}");
            }
        }
        Ok(cli)
    }
}

fn usage() -> &'static str {
    "用法: applog-cli <LOG_FILE> [--config=PATH] [--screen=ID] [--kind=KIND] \
     [--keyword=TEXT] [--pretty] [--log-level=LEVEL] [--no-log]"
}

#[cfg(feature = "logging")]
fn init_logging(cli: &CliArgs, config: &Config) -> Result<()> {
    use applog_analysis::logging::{LogConfig, init_logging, parse_level};

    if cli.no_log {
        return Ok(());
    }
    let level = cli.log_level.as_deref().unwrap_or(config.log.level.as_str());
    let mut log_config = LogConfig::new()
        .level(parse_level(level))
        .stdout(config.log.enable_stdout);
    if let Some(dir) = &config.log.log_dir {
        log_config = log_config.log_dir(dir);
    }
    init_logging(log_config)?;
    Ok(())
}

#[cfg(not(feature = "logging"))]
fn init_logging(_cli: &CliArgs, _config: &Config) -> Result<()> {
    Ok(())
}

fn print_result(result: &AnalysisResult, config: &Config, pretty: bool) {
    println!("== 语句 ({}) ==", result.statements.len());
    for entry in &result.statements {
        println!(
            "[{}] [{}] {} {}",
            entry.timestamp,
            entry.screen_id.as_deref().unwrap_or("-"),
            entry.command_kind,
            entry.originating_function
        );
        if pretty {
            for line in entry.pretty_sql().lines() {
                println!("    {line}");
            }
            for mapping in entry.field_mappings(config.analysis.field_lookback_chars) {
                println!(
                    "      {} = {}",
                    mapping.column.as_deref().unwrap_or("?"),
                    mapping.value
                );
            }
        } else {
            println!("    {}", entry.final_sql);
        }
    }

    println!("\n== 错误 ({}) ==", result.errors.len());
    for entry in &result.errors {
        println!(
            "[{}] [{}] {}",
            entry.timestamp,
            entry.screen_id.as_deref().unwrap_or("-"),
            entry.summary
        );
        if pretty {
            for line in entry.details.lines() {
                println!("    {line}");
            }
        }
    }
}

/// 逐个输出导出统计，多于一个导出器时再输出合计
fn print_export_stats(stats: &[(String, ExportStats)]) {
    for (name, stat) in stats {
        println!("导出 {name}: {stat}");
    }
    if stats.len() > 1 {
        println!("导出合计: {}", merged_stats(stats));
    }
}

fn merged_stats(stats: &[(String, ExportStats)]) -> ExportStats {
    let mut total = ExportStats::default();
    for (_, stat) in stats {
        total.merge(stat);
    }
    total
}

fn main() -> Result<()> {
    let cli = CliArgs::from_args(std::env::args().skip(1))?;
    let Some(log_file) = cli.log_file.clone() else {
        println!("{}", usage());
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.validate()?;
    init_logging(&cli, &config)?;

    let (result, stats, elapsed) = process_log_file(&log_file, &config)?;

    let screens = result.screen_ids();
    let total = result.total_count();
    let shown = if cli.filter.is_empty() { result } else { result.filter(&cli.filter) };
    if shown.is_empty() {
        println!("没有匹配的语句或错误");
    } else {
        print_result(&shown, &config, cli.pretty);
    }

    println!(
        "\n画面: {}",
        screens.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    );
    print_export_stats(&stats);
    println!("\n解析完成，共 {} 条记录，耗时 {elapsed:.2?}", total);
    Ok(())
}
