use std::time::Duration;

use tokio::{
	sync::{
		mpsc::{self, UnboundedReceiver, UnboundedSender},
		watch,
	},
	task::JoinHandle,
	time::{self, Instant},
};

use scorescope_domain::Debouncer;

use crate::{Error, Generation, Result, ScoreRange};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeInputEvent {
	Interact(ScoreRange),
	Sync(ScoreRange),
	Cancel { generation: Generation },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettledRange {
	pub generation: Generation,
	pub range: ScoreRange,
}

/// Dropping the handle closes the input; the task then flushes a pending value once and exits.
#[derive(Debug)]
pub struct DebouncedRangeInput {
	events: UnboundedSender<RangeInputEvent>,
	tracked: watch::Receiver<Option<ScoreRange>>,
	task: JoinHandle<()>,
}
impl DebouncedRangeInput {
	pub fn spawn(
		quiet: Duration,
		generation: Generation,
	) -> (Self, UnboundedReceiver<SettledRange>) {
		let (events, inputs) = mpsc::unbounded_channel();
		let (settled_tx, settled_rx) = mpsc::unbounded_channel();
		let (tracked_tx, tracked) = watch::channel(None);
		let task = tokio::spawn(drive(quiet, generation, inputs, tracked_tx, settled_tx));

		(Self { events, tracked, task }, settled_rx)
	}

	pub fn tracked(&self) -> watch::Receiver<Option<ScoreRange>> {
		self.tracked.clone()
	}

	pub fn interact(&self, range: ScoreRange) -> Result<()> {
		self.send(RangeInputEvent::Interact(range))
	}

	pub fn sync(&self, range: ScoreRange) -> Result<()> {
		self.send(RangeInputEvent::Sync(range))
	}

	pub fn cancel(&self, generation: Generation) -> Result<()> {
		self.send(RangeInputEvent::Cancel { generation })
	}

	pub fn send(&self, event: RangeInputEvent) -> Result<()> {
		self.events.send(event).map_err(|_| Error::InputClosed)
	}

	pub async fn close(self) {
		let Self { events, task, .. } = self;

		drop(events);

		if let Err(err) = task.await {
			tracing::error!(error = %err, "Range input task failed.");
		}
	}
}

async fn drive(
	quiet: Duration,
	mut generation: Generation,
	mut inputs: UnboundedReceiver<RangeInputEvent>,
	tracked: watch::Sender<Option<ScoreRange>>,
	settled: UnboundedSender<SettledRange>,
) {
	let mut debouncer = Debouncer::new(quiet);

	loop {
		let deadline = debouncer.deadline();

		tokio::select! {
			event = inputs.recv() => {
				let Some(event) = event else {
					break;
				};

				match event {
					RangeInputEvent::Interact(range) =>
						debouncer.interact(range, Instant::now().into_std()),
					RangeInputEvent::Sync(range) => debouncer.sync(range),
					RangeInputEvent::Cancel { generation: next } => {
						debouncer.reset();

						generation = next;
					},
				}

				let value = debouncer.value().copied();

				tracked.send_if_modified(|current| {
					let modified = *current != value;

					*current = value;

					modified
				});
			},
			_ = wait_until(deadline) => {
				let Some(range) = debouncer.poll(Instant::now().into_std()) else {
					continue;
				};

				if settled.send(SettledRange { generation, range }).is_err() {
					return;
				}
			},
		}
	}

	if let Some(range) = debouncer.flush() {
		let _ = settled.send(SettledRange { generation, range });
	}
}

async fn wait_until(deadline: Option<std::time::Instant>) {
	match deadline {
		Some(deadline) => time::sleep_until(Instant::from_std(deadline)).await,
		None => std::future::pending().await,
	}
}
