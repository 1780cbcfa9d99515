use crate::domain::link::LinkTemplate;
use crate::domain::ports::{IdGeneratorArc, SchedulerArc};
use crate::domain::wizard::{FieldValue, WizardDefinition, WizardPhase, WizardSession};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// A wizard session driven by an injected scheduler.
///
/// `DemoWizard` owns the session and runs the simulated generation as a
/// background task. The task only writes its result if the session has not
/// been reset since it started; `reset` and drop also abort it.
pub struct DemoWizard {
    session: Arc<Mutex<WizardSession>>,
    template: LinkTemplate,
    scheduler: SchedulerArc,
    ids: IdGeneratorArc,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DemoWizard {
    /// Creates a new `DemoWizard` at step 0.
    ///
    /// # Arguments
    ///
    /// * `definition` - Steps, generation step and field defaults.
    /// * `template` - Shape of the generated link.
    /// * `scheduler` - Source of the simulated generation latency.
    /// * `ids` - Source of the random part of the link.
    /// * `delay` - How long generation takes.
    pub fn new(
        definition: WizardDefinition,
        template: LinkTemplate,
        scheduler: SchedulerArc,
        ids: IdGeneratorArc,
        delay: Duration,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(WizardSession::new(definition))),
            template,
            scheduler,
            ids,
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn template(&self) -> &LinkTemplate {
        &self.template
    }

    /// A copy of the current session state.
    pub async fn snapshot(&self) -> WizardSession {
        self.session.lock().await.clone()
    }

    pub async fn current_step(&self) -> usize {
        self.session.lock().await.current_step()
    }

    pub async fn phase(&self) -> WizardPhase {
        self.session.lock().await.phase()
    }

    pub async fn artifact(&self) -> Option<String> {
        self.session.lock().await.artifact().map(str::to_string)
    }

    pub async fn is_generating(&self) -> bool {
        self.session.lock().await.is_generating()
    }

    pub async fn can_advance(&self) -> bool {
        self.session.lock().await.can_advance()
    }

    pub async fn set_field(&self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.session.lock().await.set_field(name, value);
    }

    pub async fn go_to_step(&self, index: usize) -> bool {
        self.navigate(|session| session.go_to_step(index)).await
    }

    pub async fn next(&self) -> bool {
        self.navigate(WizardSession::next).await
    }

    pub async fn back(&self) -> bool {
        self.navigate(WizardSession::back).await
    }

    /// Applies one navigation move while holding the session lock.
    async fn navigate(&self, step: impl FnOnce(&mut WizardSession) -> bool) -> bool {
        let mut session = self.session.lock().await;
        let from = session.current_step();
        let moved = step(&mut *session);
        if moved {
            debug!(from, to = session.current_step(), "wizard step changed");
        } else {
            debug!(from, "wizard navigation ignored");
        }
        moved
    }

    /// Starts the simulated generation. Returns `false` without doing
    /// anything when not idle at the generation step.
    ///
    /// The timer is registered before this returns, so virtual-time
    /// schedulers can be advanced right away.
    pub async fn generate(&self) -> bool {
        let (ticket, step) = {
            let mut session = self.session.lock().await;
            match session.begin_generation() {
                Some(ticket) => (ticket, session.current_step()),
                None => {
                    debug!(step = session.current_step(), "generation request ignored");
                    return false;
                }
            }
        };
        let delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX);
        info!(step, delay_ms, "generation started");

        let timer = self.scheduler.after(self.delay);
        let session = Arc::clone(&self.session);
        let ids = Arc::clone(&self.ids);
        let template = self.template.clone();

        let handle = tokio::spawn(async move {
            // A dropped timer still completes: generation never fails.
            let _ = timer.await;
            let link = template.render(&ids.next_id());
            let mut session = session.lock().await;
            if session.complete_generation(ticket, link.clone()) {
                info!(%link, "link generated");
            } else {
                debug!("stale generation discarded");
            }
        });

        if let Some(previous) = self.pending.lock().await.replace(handle) {
            previous.abort();
        }
        true
    }

    /// Waits for the in-flight generation task, if any, to finish.
    pub async fn wait_for_generation(&self) {
        let handle = self.pending.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    /// Returns to step 0 with no fields and no artifact, cancelling any
    /// pending generation.
    pub async fn reset(&self) {
        if let Some(handle) = self.pending.lock().await.take() {
            handle.abort();
            debug!("pending generation cancelled");
        }
        self.session.lock().await.reset();
        info!("wizard reset");
    }
}

impl Drop for DemoWizard {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}
