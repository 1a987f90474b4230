//! CraftPlan 命令列介面
//!
//! Usage:
//!   craftplan --list [-d DIR]
//!   craftplan -e "Electronic Circuit" -i 2.5 -l 2 [-d DIR] [-v]

use anyhow::{bail, Context};
use craftplan::loader::{self, FACILITIES_FILE, ITEMS_FILE};
use craftplan::{report, Catalog, PlannerConfig, Resolver};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

const USAGE: &str = "\
Usage: craftplan [OPTIONS]

Options:
  -e, --item NAME     目標物品名稱
  -i, --ips RATE      每秒產出數量（預設 1）
  -l, --level N       最高設施科技等級（預設 3）
  -d, --data DIR      目錄資料夾，包含 facilities.json 與 items.json（預設 .）
      --list          列出所有已知物品
  -v, --verbose       輸出除錯日誌
  -h, --help          顯示說明";

/// 命令列參數
#[derive(Debug)]
struct Args {
    item: Option<String>,
    ips: Decimal,
    level: u32,
    data_dir: PathBuf,
    list: bool,
    verbose: bool,
    help: bool,
}

impl Args {
    fn parse(mut raw: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut args = Args {
            item: None,
            ips: Decimal::ONE,
            level: PlannerConfig::default().tech_level_cap,
            data_dir: PathBuf::from("."),
            list: false,
            verbose: false,
            help: false,
        };

        while let Some(flag) = raw.next() {
            match flag.as_str() {
                "-e" | "--item" => args.item = Some(value(&mut raw, &flag)?),
                "-i" | "--ips" => {
                    let text = value(&mut raw, &flag)?;
                    args.ips = Decimal::from_str(&text)
                        .with_context(|| format!("無效的速率: {}", text))?;
                }
                "-l" | "--level" => {
                    let text = value(&mut raw, &flag)?;
                    args.level = text
                        .parse()
                        .with_context(|| format!("無效的科技等級: {}", text))?;
                }
                "-d" | "--data" => args.data_dir = PathBuf::from(value(&mut raw, &flag)?),
                "--list" => args.list = true,
                "-v" | "--verbose" => args.verbose = true,
                "-h" | "--help" => args.help = true,
                other => bail!("未知參數: {}\n\n{}", other, USAGE),
            }
        }

        Ok(args)
    }
}

fn value(raw: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    raw.next()
        .with_context(|| format!("參數 {} 缺少值", flag))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // 初始化日誌系統（輸出到 stderr，不影響報表）
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let catalog = loader::load_catalog_dir(&args.data_dir).with_context(|| {
        format!(
            "無法載入目錄 {}（需要 {} 與 {}）",
            args.data_dir.display(),
            FACILITIES_FILE,
            ITEMS_FILE
        )
    })?;

    if args.list {
        print!("{}", report::render_item_list(&catalog));
        return Ok(());
    }

    let Some(name) = args.item.as_deref() else {
        bail!("缺少目標物品（-e NAME）\n\n{}", USAGE);
    };
    if args.ips <= Decimal::ZERO {
        bail!("每秒產出數量必須為正數");
    }

    let item_id = Catalog::normalize_id(name);
    let config = PlannerConfig::new().with_tech_level_cap(args.level);
    let resolver = Resolver::new(Arc::new(catalog), config);

    let plan = resolver.resolve(&item_id, args.ips)?;
    print!("{}", report::render_plan(&plan));

    Ok(())
}
