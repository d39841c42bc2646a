//! Real-time intersection demo.
//!
//! Runs a shortened cycle, prints every runtime event via [`LogWriter`] and
//! every snapshot change via a watch receiver, and files one pedestrian
//! request mid-green. Ctrl-C stops the intersection.
//!
//! ```sh
//! cargo run --example crossing --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use crosslight::{Config, Intersection, LogWriter, Timing};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut cfg = Config::default();
    cfg.timing = Timing {
        green: Duration::from_millis(2500),
        yellow: Duration::from_millis(1000),
        red: Duration::from_millis(3000),
    };

    let ix = Intersection::start(cfg);
    ix.attach(Arc::new(LogWriter));

    let mut watch = ix.watch();
    tokio::spawn(async move {
        while watch.changed().await.is_ok() {
            let snap = *watch.borrow();
            println!(
                "  view: traffic={} pedestrian={}",
                snap.traffic.as_str(),
                snap.pedestrian.as_str()
            );
        }
    });

    // Let one natural cycle play out, then press the button mid-green.
    tokio::time::sleep(cfg.timing.cycle()).await;
    tokio::time::sleep(Duration::from_millis(500)).await;
    println!("  demo: pressing the pedestrian button");
    ix.request_crossing().await;

    println!("  demo: running until Ctrl-C");
    tokio::signal::ctrl_c().await?;
    ix.stop().await?;
    Ok(())
}
