use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};
use async_trait::async_trait;

use game_core::{Column, ScriptedRng};
use pandalearn_client::{Client, Frontend};
use runtime::{ActiveGame, Runtime, RuntimeHandle, Screen};

async fn runtime() -> Runtime {
    Runtime::builder()
        .rng(ScriptedRng::new(vec![0]))
        .build()
        .await
        .expect("runtime builds")
}

/// Plays one matching move, records the board and quits.
struct ScriptedFrontend {
    matched: Arc<Mutex<Option<usize>>>,
}

#[async_trait]
impl Frontend for ScriptedFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        handle.navigate(Screen::Matching).await?;

        let snapshot = handle.query_snapshot().await?;
        let ActiveGame::Matching(board) = &snapshot.game else {
            bail!("matching board not dealt");
        };
        let pair_id = board.column(Column::Left)[0].pair_id;

        handle.select_card(Column::Left, pair_id).await?;
        handle.select_card(Column::Right, pair_id).await?;

        let snapshot = handle.query_snapshot().await?;
        let matched = snapshot.game.as_matching().map(|board| board.matched_count());
        *self.matched.lock().unwrap() = matched;
        Ok(())
    }
}

struct FailingFrontend;

#[async_trait]
impl Frontend for FailingFrontend {
    async fn run(&mut self, _handle: RuntimeHandle) -> Result<()> {
        bail!("terminal went away")
    }
}

#[tokio::test]
async fn client_runs_frontend_then_stops_runtime() {
    let matched = Arc::new(Mutex::new(None));
    let client = Client::builder()
        .runtime(runtime().await)
        .frontend(ScriptedFrontend {
            matched: Arc::clone(&matched),
        })
        .build()
        .unwrap();

    client.run().await.unwrap();
    assert_eq!(*matched.lock().unwrap(), Some(1));
}

#[tokio::test]
async fn frontend_errors_propagate_after_shutdown() {
    let client = Client::builder()
        .runtime(runtime().await)
        .frontend(FailingFrontend)
        .build()
        .unwrap();

    let err = client.run().await.unwrap_err();
    assert!(err.to_string().contains("terminal went away"));
}

#[tokio::test]
async fn builder_requires_both_layers() {
    let missing_frontend = Client::builder().runtime(runtime().await).build();
    assert!(missing_frontend.is_err());

    let missing_runtime = Client::builder().frontend(FailingFrontend).build();
    let err = missing_runtime.err().unwrap();
    assert!(err.to_string().contains("Runtime is required"));
}
