//! View model for the sheet shown while a place is selected.

use crate::place::{LookAroundScene, PlaceResult};

use super::Action;

pub const PLACEHOLDER_NAME: &str = "Unnamed place";
pub const PLACEHOLDER_DESCRIPTION: &str = "No description available";

/// User actions available from the details sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
	/// Hand the selection to the system map application.
	OpenExternally,
	/// Ask for driving directions to the selection and close the sheet.
	GetDirections,
	/// Drop the selection and close the sheet.
	Close,
}

impl From<PanelCommand> for Action {
	fn from(command: PanelCommand) -> Self {
		match command {
			PanelCommand::OpenExternally => Action::OpenExternally,
			PanelCommand::GetDirections => Action::RequestDirections,
			PanelCommand::Close => Action::ClearSelection,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewState<'a> {
	Loading,
	Ready(&'a LookAroundScene),
	Unavailable,
}

/// Read-only snapshot of everything the details sheet renders.
#[derive(Debug, Clone, Copy)]
pub struct DetailsPanel<'a> {
	pub(super) selection: Option<&'a PlaceResult>,
	pub(super) preview: PreviewState<'a>,
	pub(super) visible: bool,
	pub(super) directions_requested: bool,
}

impl<'a> DetailsPanel<'a> {
	pub fn selection(&self) -> Option<&'a PlaceResult> {
		self.selection
	}

	pub fn name(&self) -> &'a str {
		self.selection
			.and_then(|place| place.name.as_deref())
			.unwrap_or(PLACEHOLDER_NAME)
	}

	pub fn description(&self) -> &'a str {
		self.selection
			.and_then(|place| place.description.as_deref())
			.unwrap_or(PLACEHOLDER_DESCRIPTION)
	}

	pub fn preview(&self) -> PreviewState<'a> {
		self.preview
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn directions_requested(&self) -> bool {
		self.directions_requested
	}

	/// Commands that would change anything given the current state.
	pub fn available_commands(&self) -> Vec<PanelCommand> {
		let mut commands = Vec::with_capacity(3);
		if self.selection.is_some() {
			commands.push(PanelCommand::OpenExternally);
			commands.push(PanelCommand::GetDirections);
		}
		commands.push(PanelCommand::Close);
		commands
	}
}
