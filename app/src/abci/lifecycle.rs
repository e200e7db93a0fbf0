//! The order in which a consensus engine may drive an ABCI application.
//!
//! ```text
//!   Genesis --InitChain--> Idle { h } --BeginBlock--> Executing { h }
//!      |                     ^                             |
//!      |                     |                          EndBlock
//!      |                   Commit                          v
//!      |                     +-------------------------- Ended { h }
//!      |
//!      +--OfferSnapshot(Accept)--> Restoring --ApplySnapshotChunk(all)--> Idle { snapshot + 1 }
//! ```
//!
//! `Info` moves a fresh lifecycle straight to `Idle` when the application
//! reports committed state. Calls that do not appear above are valid in every
//! phase.

use core::fmt::{Display, Error as FmtError, Formatter};

use tendermint_proto::abci::{response_apply_snapshot_chunk, response_offer_snapshot};
use tracing::{debug, info, warn};

use crate::error::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Echo,
    Flush,
    Info,
    SetOption,
    InitChain,
    Query,
    CheckTx,
    BeginBlock,
    DeliverTx,
    EndBlock,
    Commit,
    ListSnapshots,
    OfferSnapshot,
    LoadSnapshotChunk,
    ApplySnapshotChunk,
}

impl Call {
    pub fn as_str(&self) -> &'static str {
        match self {
            Call::Echo => "Echo",
            Call::Flush => "Flush",
            Call::Info => "Info",
            Call::SetOption => "SetOption",
            Call::InitChain => "InitChain",
            Call::Query => "Query",
            Call::CheckTx => "CheckTx",
            Call::BeginBlock => "BeginBlock",
            Call::DeliverTx => "DeliverTx",
            Call::EndBlock => "EndBlock",
            Call::Commit => "Commit",
            Call::ListSnapshots => "ListSnapshots",
            Call::OfferSnapshot => "OfferSnapshot",
            Call::LoadSnapshotChunk => "LoadSnapshotChunk",
            Call::ApplySnapshotChunk => "ApplySnapshotChunk",
        }
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been executed yet.
    Genesis,
    /// A snapshot was accepted and its chunks are being applied.
    Restoring {
        height: i64,
        chunks: u32,
        applied: u32,
    },
    /// Ready for the next block.
    Idle { next_height: i64 },
    /// Between BeginBlock and EndBlock.
    Executing { height: i64 },
    /// Between EndBlock and Commit.
    Ended { height: i64 },
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Phase::Genesis => write!(f, "Genesis"),
            Phase::Restoring {
                height,
                chunks,
                applied,
            } => write!(
                f,
                "Restoring {{ height: {}, applied: {}/{} }}",
                height, applied, chunks
            ),
            Phase::Idle { next_height } => write!(f, "Idle {{ next_height: {} }}", next_height),
            Phase::Executing { height } => write!(f, "Executing {{ height: {} }}", height),
            Phase::Ended { height } => write!(f, "Ended {{ height: {} }}", height),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Lifecycle {
    phase: Phase,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: Phase::Genesis,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    fn out_of_order(&self, call: Call) -> Error {
        warn!(%call, phase = %self.phase, "rejecting out-of-order ABCI call");
        Error::out_of_order(call.to_string(), self.phase.to_string())
    }

    fn transition(&mut self, call: Call, next: Phase) {
        debug!(%call, from = %self.phase, to = %next, "ABCI phase transition");
        self.phase = next;
    }

    /// Checks that `call` may be issued in the current phase.
    /// Heights are checked separately by [`Lifecycle::begin_block`] and
    /// [`Lifecycle::end_block`].
    pub fn check(&self, call: Call) -> Result<(), Error> {
        let allowed = match call {
            Call::InitChain | Call::OfferSnapshot => matches!(self.phase, Phase::Genesis),
            Call::BeginBlock => matches!(self.phase, Phase::Idle { .. }),
            Call::DeliverTx | Call::EndBlock => matches!(self.phase, Phase::Executing { .. }),
            Call::Commit => matches!(self.phase, Phase::Ended { .. }),
            Call::ApplySnapshotChunk => matches!(self.phase, Phase::Restoring { .. }),
            Call::Echo
            | Call::Flush
            | Call::Info
            | Call::SetOption
            | Call::Query
            | Call::CheckTx
            | Call::ListSnapshots
            | Call::LoadSnapshotChunk => true,
        };

        if allowed {
            Ok(())
        } else {
            Err(self.out_of_order(call))
        }
    }

    /// Validates an InitChain and returns the height of the first block.
    pub fn init_chain(&self, initial_height: i64) -> Result<i64, Error> {
        let first = initial_height.max(1);
        successor(Call::InitChain, first)?;
        Ok(first)
    }

    /// Validates a BeginBlock and returns the height of the block it opens.
    pub fn begin_block(&self, header_height: Option<i64>) -> Result<i64, Error> {
        match self.phase {
            Phase::Idle { next_height } => match header_height {
                Some(height) if height != next_height => Err(Error::height_mismatch(
                    Call::BeginBlock.to_string(),
                    next_height,
                    height,
                )),
                _ => {
                    successor(Call::BeginBlock, next_height)?;
                    Ok(next_height)
                }
            },
            _ => Err(self.out_of_order(Call::BeginBlock)),
        }
    }

    pub fn end_block(&self, height: i64) -> Result<(), Error> {
        match self.phase {
            Phase::Executing { height: current } if current != height => Err(
                Error::height_mismatch(Call::EndBlock.to_string(), current, height),
            ),
            Phase::Executing { .. } => Ok(()),
            _ => Err(self.out_of_order(Call::EndBlock)),
        }
    }

    /// Validates a Commit and returns the height of the block after it.
    pub fn commit(&self) -> Result<i64, Error> {
        match self.phase {
            Phase::Ended { height } => successor(Call::Commit, height),
            _ => Err(self.out_of_order(Call::Commit)),
        }
    }

    /// Validates the height of an offered snapshot. The chain must be able to
    /// continue after it.
    pub fn snapshot_height(&self, height: u64) -> Result<i64, Error> {
        i64::try_from(height)
            .ok()
            .filter(|h| h.checked_add(1).is_some())
            .ok_or_else(|| Error::snapshot_height(height))
    }

    pub fn on_info(&mut self, last_block_height: i64) -> Result<(), Error> {
        if self.phase == Phase::Genesis && last_block_height > 0 {
            let next_height = successor(Call::Info, last_block_height)?;

            info!(last_block_height, "resuming from committed state");
            self.transition(Call::Info, Phase::Idle { next_height });
        }

        Ok(())
    }

    pub fn on_init_chain(&mut self, first_height: i64) {
        self.transition(
            Call::InitChain,
            Phase::Idle {
                next_height: first_height,
            },
        );
    }

    pub fn on_begin_block(&mut self, height: i64) {
        self.transition(Call::BeginBlock, Phase::Executing { height });
    }

    pub fn on_end_block(&mut self) {
        if let Phase::Executing { height } = self.phase {
            self.transition(Call::EndBlock, Phase::Ended { height });
        }
    }

    pub fn on_commit(&mut self, next_height: i64) {
        self.transition(Call::Commit, Phase::Idle { next_height });
    }

    pub fn on_offer_snapshot(
        &mut self,
        height: i64,
        chunks: u32,
        result: response_offer_snapshot::Result,
    ) {
        if result == response_offer_snapshot::Result::Accept {
            self.transition(
                Call::OfferSnapshot,
                Phase::Restoring {
                    height,
                    chunks,
                    applied: 0,
                },
            );
        }
    }

    pub fn on_apply_snapshot_chunk(
        &mut self,
        result: response_apply_snapshot_chunk::Result,
    ) -> Result<(), Error> {
        use response_apply_snapshot_chunk::Result as ChunkResult;

        let (height, chunks, applied) = match self.phase {
            Phase::Restoring {
                height,
                chunks,
                applied,
            } => (height, chunks, applied),
            _ => return Ok(()),
        };

        match result {
            ChunkResult::Accept => {
                let applied = applied.saturating_add(1);
                let next = if applied >= chunks {
                    info!(height, "snapshot restored");
                    Phase::Idle {
                        next_height: successor(Call::ApplySnapshotChunk, height)?,
                    }
                } else {
                    Phase::Restoring {
                        height,
                        chunks,
                        applied,
                    }
                };
                self.transition(Call::ApplySnapshotChunk, next);
            }
            ChunkResult::Abort | ChunkResult::RejectSnapshot | ChunkResult::RetrySnapshot => {
                warn!(height, ?result, "snapshot restoration abandoned");
                self.transition(Call::ApplySnapshotChunk, Phase::Genesis);
            }
            ChunkResult::Unknown | ChunkResult::Retry => {}
        }

        Ok(())
    }
}

fn successor(call: Call, height: i64) -> Result<i64, Error> {
    height
        .checked_add(1)
        .ok_or_else(|| Error::height_overflow(call.to_string(), height))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::error::ErrorDetail;

    use response_apply_snapshot_chunk::Result as ChunkResult;
    use response_offer_snapshot::Result as OfferResult;

    fn executing(height: i64) -> Lifecycle {
        let mut lifecycle = Lifecycle::new();
        lifecycle.on_init_chain(height);
        lifecycle.on_begin_block(height);
        lifecycle
    }

    fn is_out_of_order<T>(result: Result<T, Error>) -> bool {
        match result {
            Err(e) => matches!(e.detail(), ErrorDetail::OutOfOrder(_)),
            Ok(_) => false,
        }
    }

    #[test]
    fn block_cycle() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.phase(), &Phase::Genesis);

        lifecycle.check(Call::InitChain).unwrap();
        let first = lifecycle.init_chain(0).unwrap();
        lifecycle.on_init_chain(first);
        assert_eq!(lifecycle.phase(), &Phase::Idle { next_height: 1 });

        let height = lifecycle.begin_block(Some(1)).unwrap();
        lifecycle.on_begin_block(height);
        lifecycle.check(Call::DeliverTx).unwrap();

        lifecycle.end_block(1).unwrap();
        lifecycle.on_end_block();
        assert_eq!(lifecycle.phase(), &Phase::Ended { height: 1 });

        let next_height = lifecycle.commit().unwrap();
        lifecycle.on_commit(next_height);
        assert_eq!(lifecycle.phase(), &Phase::Idle { next_height: 2 });
    }

    #[test]
    fn out_of_order_calls() {
        struct Test {
            name: &'static str,
            lifecycle: Lifecycle,
            call: Call,
        }

        let ended = {
            let mut l = executing(1);
            l.on_end_block();
            l
        };

        let tests = vec![
            Test {
                name: "DeliverTx before any BeginBlock",
                lifecycle: Lifecycle::new(),
                call: Call::DeliverTx,
            },
            Test {
                name: "Commit before EndBlock",
                lifecycle: executing(1),
                call: Call::Commit,
            },
            Test {
                name: "InitChain after BeginBlock",
                lifecycle: executing(1),
                call: Call::InitChain,
            },
            Test {
                name: "InitChain twice",
                lifecycle: {
                    let mut l = Lifecycle::new();
                    l.on_init_chain(1);
                    l
                },
                call: Call::InitChain,
            },
            Test {
                name: "BeginBlock while executing",
                lifecycle: executing(1),
                call: Call::BeginBlock,
            },
            Test {
                name: "DeliverTx after EndBlock",
                lifecycle: ended.clone(),
                call: Call::DeliverTx,
            },
            Test {
                name: "OfferSnapshot after InitChain",
                lifecycle: ended,
                call: Call::OfferSnapshot,
            },
            Test {
                name: "ApplySnapshotChunk without an offer",
                lifecycle: Lifecycle::new(),
                call: Call::ApplySnapshotChunk,
            },
        ];

        for test in tests {
            assert!(
                is_out_of_order(test.lifecycle.check(test.call)),
                "{}",
                test.name
            );
        }
    }

    #[test]
    fn calls_valid_in_every_phase() {
        let phases = vec![Lifecycle::new(), executing(3), {
            let mut l = Lifecycle::new();
            l.on_offer_snapshot(5, 2, OfferResult::Accept);
            l
        }];

        for lifecycle in phases {
            for call in [
                Call::Echo,
                Call::Flush,
                Call::Info,
                Call::SetOption,
                Call::Query,
                Call::CheckTx,
                Call::ListSnapshots,
                Call::LoadSnapshotChunk,
            ] {
                assert!(lifecycle.check(call).is_ok(), "{} in {}", call, lifecycle.phase());
            }
        }
    }

    #[test]
    fn heights_are_checked() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.on_init_chain(5);

        let err = lifecycle.begin_block(Some(6)).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::HeightMismatch(_)));

        assert_eq!(lifecycle.begin_block(None).unwrap(), 5);
        lifecycle.on_begin_block(5);

        let err = lifecycle.end_block(4).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::HeightMismatch(_)));
        assert!(lifecycle.end_block(5).is_ok());
    }

    #[test]
    fn info_resumes_committed_state() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.on_info(0).unwrap();
        assert_eq!(lifecycle.phase(), &Phase::Genesis);

        lifecycle.on_info(7).unwrap();
        assert_eq!(lifecycle.phase(), &Phase::Idle { next_height: 8 });

        // Info never rewinds a running chain.
        lifecycle.on_info(3).unwrap();
        assert_eq!(lifecycle.phase(), &Phase::Idle { next_height: 8 });
    }

    #[test]
    fn snapshot_restoration() {
        let mut lifecycle = Lifecycle::new();

        lifecycle.on_offer_snapshot(10, 2, OfferResult::Reject);
        assert_eq!(lifecycle.phase(), &Phase::Genesis);

        lifecycle.on_offer_snapshot(10, 2, OfferResult::Accept);
        lifecycle.on_apply_snapshot_chunk(ChunkResult::Retry).unwrap();
        lifecycle.on_apply_snapshot_chunk(ChunkResult::Accept).unwrap();
        assert_eq!(
            lifecycle.phase(),
            &Phase::Restoring {
                height: 10,
                chunks: 2,
                applied: 1
            }
        );

        lifecycle.on_apply_snapshot_chunk(ChunkResult::Accept).unwrap();
        assert_eq!(lifecycle.phase(), &Phase::Idle { next_height: 11 });
    }

    #[test]
    fn abandoned_restoration_returns_to_genesis() {
        for result in [
            ChunkResult::Abort,
            ChunkResult::RejectSnapshot,
            ChunkResult::RetrySnapshot,
        ] {
            let mut lifecycle = Lifecycle::new();
            lifecycle.on_offer_snapshot(10, 3, OfferResult::Accept);
            lifecycle.on_apply_snapshot_chunk(ChunkResult::Accept).unwrap();
            lifecycle.on_apply_snapshot_chunk(result).unwrap();
            assert_eq!(lifecycle.phase(), &Phase::Genesis, "{:?}", result);
        }
    }

    fn is_height_overflow<T>(result: Result<T, Error>) -> bool {
        match result {
            Err(e) => matches!(e.detail(), ErrorDetail::HeightOverflow(_)),
            Ok(_) => false,
        }
    }

    #[test]
    fn heights_never_overflow() {
        let lifecycle = Lifecycle::new();
        assert!(is_height_overflow(lifecycle.init_chain(i64::MAX)));
        assert_eq!(lifecycle.init_chain(i64::MAX - 1).unwrap(), i64::MAX - 1);

        let mut lifecycle = Lifecycle::new();
        assert!(is_height_overflow(lifecycle.on_info(i64::MAX)));
        assert_eq!(lifecycle.phase(), &Phase::Genesis);

        lifecycle.on_info(i64::MAX - 1).unwrap();
        assert_eq!(
            lifecycle.phase(),
            &Phase::Idle {
                next_height: i64::MAX
            }
        );
        assert!(is_height_overflow(lifecycle.begin_block(None)));

        let mut lifecycle = executing(i64::MAX - 1);
        lifecycle.on_end_block();
        assert_eq!(lifecycle.commit().unwrap(), i64::MAX);
    }

    #[test]
    fn snapshot_heights_must_leave_room_for_the_next_block() {
        let lifecycle = Lifecycle::new();

        assert_eq!(lifecycle.snapshot_height(10).unwrap(), 10);
        assert!(lifecycle.snapshot_height(u64::MAX).is_err());
        assert!(lifecycle
            .snapshot_height(u64::try_from(i64::MAX).unwrap())
            .is_err());
    }
}
