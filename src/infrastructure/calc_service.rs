use color_eyre::eyre::Result;
use tokio::{sync::mpsc, task::JoinSet};
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg, domain::calculation::Calculation,
    infrastructure::arithmetic_client::ArithmeticClient,
};

/// Operations accepted by CalcService
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcOperation {
    /// Ask the arithmetic service for a result
    Calculate(Calculation),
}

impl CalcOperation {
    pub fn name(&self) -> &'static str {
        match self {
            CalcOperation::Calculate(_) => "Calculate",
        }
    }
}

/// CalcService performs requests against the arithmetic service in the background.
/// Each request runs in its own task so slow replies never block the UI, and
/// every outcome is reported back as `RawMsg::CalculationFinished`.
pub struct CalcService {
    client: ArithmeticClient,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<CalcOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    requests: JoinSet<()>,
}

pub type NewCalcService = (
    mpsc::UnboundedSender<CalcOperation>, // op_tx - operations to run
    CancellationToken,                    // shutdown signal
    CalcService,
);

impl CalcService {
    pub fn new(client: ArithmeticClient, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewCalcService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                client,
                op_rx,
                cancel_token,
                raw_tx,
                requests: JoinSet::new(),
            },
        )
    }

    /// Run the CalcService in background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            if let Err(e) = self.run_service().await {
                log::error!("CalcService error: {e}");
                let _ = self
                    .raw_tx
                    .send(RawMsg::Error(format!("CalcService error: {e}")));
            }
        });
    }

    async fn run_service(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op),
                        None => {
                            log::info!("CalcService: operation channel closed");
                            break;
                        }
                    }
                }

                // Reap finished requests so the set does not grow unbounded
                Some(joined) = self.requests.join_next(), if !self.requests.is_empty() => {
                    if let Err(e) = joined {
                        if e.is_panic() {
                            log::error!("CalcService: request task panicked: {e}");
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("CalcService received cancellation signal");
                    break;
                }
            }
        }

        if !self.requests.is_empty() {
            log::info!(
                "CalcService: aborting {} outstanding request(s)",
                self.requests.len()
            );
        }
        self.requests.shutdown().await;

        Ok(())
    }

    fn handle_operation(&mut self, op: CalcOperation) {
        log::debug!("Handling CalcOperation: {op:?}");

        match op {
            CalcOperation::Calculate(calculation) => {
                let client = self.client.clone();
                let raw_tx = self.raw_tx.clone();
                self.requests.spawn(async move {
                    let outcome = client.calculate(&calculation).await;
                    match &outcome {
                        Ok(result) => log::info!("{calculation} = {result}"),
                        Err(e) => log::warn!("{calculation} failed: {e}"),
                    }
                    let _ = raw_tx.send(RawMsg::CalculationFinished {
                        calculation,
                        outcome,
                    });
                });
            }
        }
    }
}
