//! The safety loop.

use banker_core::config::CheckerConfig;
use banker_core::errors::InvalidInputError;
use banker_core::models::{NeedMatrix, SystemSnapshot, Units};
use banker_core::safety_span;

use crate::result::SafetyResult;
use crate::trace::{TraceRecorder, TraceStep};

/// Runs the Banker's safety algorithm over validated snapshots.
///
/// Stateless between calls: each `check` works on its own copy of the
/// available vector, so one checker can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct SafetyChecker {
    config: CheckerConfig,
}

impl SafetyChecker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Decide whether `snapshot` is in a safe state.
    ///
    /// Fails only when the snapshot exceeds the configured size limits.
    pub fn check(&self, snapshot: &SystemSnapshot) -> Result<SafetyResult, InvalidInputError> {
        self.enforce_limits(snapshot)?;

        let span = safety_span!(snapshot.process_count(), snapshot.resource_count());
        let _guard = span.enter();

        for over in snapshot.over_allocations() {
            tracing::warn!(
                process = over.process,
                resource = over.resource,
                allocated = over.allocated,
                max_need = over.max_need,
                "allocation exceeds max need; treating need as 0"
            );
        }

        let need = snapshot.need();
        let result = self.run(snapshot, &need);

        tracing::debug!(safe = result.safe, order = ?result.order, "safety check finished");
        Ok(result)
    }

    fn enforce_limits(&self, snapshot: &SystemSnapshot) -> Result<(), InvalidInputError> {
        let max_processes = self.config.effective_max_processes();
        if snapshot.process_count() > max_processes {
            return Err(InvalidInputError::LimitExceeded {
                field: "processes",
                limit: max_processes,
                actual: snapshot.process_count(),
            });
        }
        let max_resources = self.config.effective_max_resources();
        if snapshot.resource_count() > max_resources {
            return Err(InvalidInputError::LimitExceeded {
                field: "resources",
                limit: max_resources,
                actual: snapshot.resource_count(),
            });
        }
        Ok(())
    }

    fn run(&self, snapshot: &SystemSnapshot, need: &NeedMatrix) -> SafetyResult {
        let process_count = snapshot.process_count();
        let allocation = snapshot.allocation();

        let mut work: Vec<Units> = snapshot.available().to_vec();
        let mut finish = vec![false; process_count];
        let mut order = Vec::with_capacity(process_count);
        let mut trace = TraceRecorder::new(
            self.config.effective_record_trace(),
            self.config.effective_verbose_trace(),
        );

        while order.len() < process_count {
            // Always rescan from index 0 so the lowest eligible index wins.
            let next = (0..process_count).find(|&i| {
                if finish[i] {
                    return false;
                }
                match first_shortfall(need.row(i), &work) {
                    None => true,
                    Some(j) => {
                        if trace.is_verbose() {
                            trace.push(|| TraceStep::Waiting {
                                process: i,
                                resource: j,
                                need: need.row(i)[j],
                                available: work[j],
                            });
                        }
                        false
                    }
                }
            });

            let Some(i) = next else {
                let unfinished: Vec<usize> = (0..process_count).filter(|&i| !finish[i]).collect();
                trace.push(|| TraceStep::Deadlock {
                    unfinished: unfinished.clone(),
                });
                return SafetyResult {
                    safe: false,
                    order: Vec::new(),
                    blocked: unfinished,
                    trace: trace.finish(),
                };
            };

            let work_before = work.clone();
            for (w, a) in work.iter_mut().zip(allocation.row(i)) {
                *w = w.saturating_add(*a);
            }
            finish[i] = true;
            order.push(i);
            trace.push(|| TraceStep::Completed {
                process: i,
                need: need.row(i).to_vec(),
                work_before,
                work_after: work.clone(),
            });
        }

        trace.push(|| TraceStep::Safe {
            order: order.clone(),
        });
        SafetyResult {
            safe: true,
            order,
            blocked: Vec::new(),
            trace: trace.finish(),
        }
    }
}

/// Replay `order` against `snapshot` and report whether it is a complete safe
/// sequence: a permutation of every process in which each one's need fits the
/// work vector accumulated so far.
///
/// Accepts any valid sequence, not only the canonical one `check` returns.
pub fn is_safe_sequence(snapshot: &SystemSnapshot, order: &[usize]) -> bool {
    let process_count = snapshot.process_count();
    if order.len() != process_count {
        return false;
    }
    let need = snapshot.need();
    let mut work: Vec<Units> = snapshot.available().to_vec();
    let mut finish = vec![false; process_count];
    for &i in order {
        if i >= process_count || finish[i] || first_shortfall(need.row(i), &work).is_some() {
            return false;
        }
        for (w, a) in work.iter_mut().zip(snapshot.allocation().row(i)) {
            *w = w.saturating_add(*a);
        }
        finish[i] = true;
    }
    true
}

/// First resource whose need exceeds the work vector, if any.
fn first_shortfall(need: &[Units], work: &[Units]) -> Option<usize> {
    need.iter().zip(work).position(|(n, w)| n > w)
}
