#![allow(dead_code)]

use bitdash_demo::application::demos::DemoKind;
use bitdash_demo::application::wizard::DemoWizard;
use bitdash_demo::config::DemoConfig;
use bitdash_demo::domain::ports::IdGenerator;
use bitdash_demo::infrastructure::ids::RandomIdGenerator;
use bitdash_demo::infrastructure::scheduler::ManualScheduler;
use bitdash_demo::infrastructure::translation::FallbackTranslator;
use std::io::{Error, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out `id00000N`-style ids so tests can tell generations apart.
#[derive(Default)]
pub struct SequenceIds {
    next: AtomicUsize,
}

impl IdGenerator for SequenceIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("id{n:06}")
    }
}

pub fn demo_wizard(kind: DemoKind, scheduler: &ManualScheduler) -> DemoWizard {
    kind.wizard(
        &DemoConfig::default(),
        &FallbackTranslator,
        Arc::new(scheduler.clone()),
        Arc::new(RandomIdGenerator::new()),
    )
    .expect("preset definitions are valid")
}

pub fn sequenced_wizard(kind: DemoKind, scheduler: &ManualScheduler) -> DemoWizard {
    kind.wizard(
        &DemoConfig::default(),
        &FallbackTranslator,
        Arc::new(scheduler.clone()),
        Arc::new(SequenceIds::default()),
    )
    .expect("preset definitions are valid")
}

pub fn write_trades_csv(path: &Path, rows: &[(u32, &str, &str, &str)]) -> Result<(), Error> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "id,symbol,created_at,profit_loss")?;
    for (id, symbol, created_at, pnl) in rows {
        writeln!(file, "{id},{symbol},{created_at},{pnl}")?;
    }
    Ok(())
}
