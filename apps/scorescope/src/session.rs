use std::io::Write;

use tokio::{
	io::{AsyncBufRead, AsyncBufReadExt},
	sync::mpsc::UnboundedReceiver,
};

use scorescope_service::{
	BrushEvent, DebouncedRangeInput, Explorer, JsonFileSource, PushOutcome, SettledRange,
};

use crate::{
	Result,
	command::{self, Command},
};

pub struct Session {
	explorer: Explorer,
	query: String,
}
impl Session {
	pub fn new(explorer: Explorer, query: String) -> Self {
		Self { explorer, query }
	}

	pub fn explorer(&self) -> &Explorer {
		&self.explorer
	}

	/// Runs until `reader` is exhausted, then flushes a pending drag and writes the final view.
	pub async fn run<R, W>(&mut self, reader: R, out: &mut W) -> Result<()>
	where
		R: AsyncBufRead + Unpin,
		W: Write,
	{
		let (input, mut settled) =
			DebouncedRangeInput::spawn(self.explorer.debounce(), self.explorer.generation());
		let mut lines = reader.lines();

		self.sync_slider(&input)?;

		loop {
			tokio::select! {
				biased;

				Some(range) = settled.recv() => self.apply_range(range),
				line = lines.next_line() => {
					let Some(line) = line? else {
						break;
					};

					self.handle_line(&line, &input, &mut settled, out).await?;
				},
			}
		}

		input.close().await;

		while let Some(range) = settled.recv().await {
			self.apply_range(range);
		}

		self.write_view(out)
	}

	async fn handle_line<W>(
		&mut self,
		line: &str,
		input: &DebouncedRangeInput,
		settled: &mut UnboundedReceiver<SettledRange>,
		out: &mut W,
	) -> Result<()>
	where
		W: Write,
	{
		let command = match command::parse(line) {
			Ok(Some(command)) => command,
			Ok(None) => return Ok(()),
			Err(err) => {
				tracing::warn!(line, error = %err, "Skipping command.");

				return Ok(());
			},
		};

		tracing::debug!(?command, "Handling command.");

		match command {
			Command::Brush(ids) => self.brush(ids, input)?,
			Command::Span { from, to } => match self.span(&from, &to) {
				Some(ids) => self.brush(ids, input)?,
				None => tracing::warn!(from = %from, to = %to, "Span endpoints are not both on the histogram."),
			},
			Command::Range(range) => input.interact(range)?,
			Command::Undo => {
				self.explorer.undo();
				self.sync_slider(input)?;
			},
			Command::Redo => {
				self.explorer.redo();
				self.sync_slider(input)?;
			},
			Command::Toggle(name) => {
				self.explorer.toggle_group_highlight(&name);
			},
			Command::Reset => {
				self.explorer.start_over();
				self.sync_slider(input)?;
			},
			Command::View => self.write_view(out)?,
			Command::Load(path) => {
				let source = JsonFileSource::new(path);

				match self.explorer.refresh(&source, &self.query).await {
					Ok(()) => {
						input.cancel(self.explorer.generation())?;
						self.sync_slider(input)?;
					},
					Err(err) => tracing::warn!(error = %err, "Keeping the current result set."),
				}
			},
			Command::Wait(duration) => {
				let deadline = tokio::time::Instant::now() + duration;

				loop {
					tokio::select! {
						Some(range) = settled.recv() => self.apply_range(range),
						_ = tokio::time::sleep_until(deadline) => break,
					}
				}
			},
		}

		Ok(())
	}

	fn brush(&mut self, ids: Vec<String>, input: &DebouncedRangeInput) -> Result<()> {
		let event = BrushEvent { generation: self.explorer.generation(), item_ids: ids };

		if self.explorer.on_brush(event) == PushOutcome::Applied {
			self.sync_slider(input)?;
		}

		Ok(())
	}

	fn span(&self, from: &str, to: &str) -> Option<Vec<String>> {
		let view = self.explorer.view()?;
		let start = view.histogram.iter().position(|bar| bar.id == from)?;
		let end = view.histogram.iter().position(|bar| bar.id == to)?;
		let (start, end) = if start <= end { (start, end) } else { (end, start) };

		Some(view.histogram[start..=end].iter().map(|bar| bar.id.clone()).collect())
	}

	fn apply_range(&mut self, settled: SettledRange) {
		let outcome = self.explorer.on_range_settled(settled);

		tracing::debug!(
			lo = settled.range.lo,
			hi = settled.range.hi,
			?outcome,
			"Range settled."
		);
	}

	fn sync_slider(&self, input: &DebouncedRangeInput) -> Result<()> {
		if let Some(range) = self.explorer.current_range() {
			input.sync(range)?;
		}

		Ok(())
	}

	fn write_view<W>(&self, out: &mut W) -> Result<()>
	where
		W: Write,
	{
		let Some(view) = self.explorer.view() else {
			tracing::warn!("No result set is loaded.");

			return Ok(());
		};
		let json = serde_json::to_string_pretty(&view)?;

		writeln!(out, "{json}")?;

		Ok(())
	}
}
