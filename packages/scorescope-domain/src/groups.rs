use ahash::{AHashMap, AHashSet};

use crate::dataset::{Dataset, Subset};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
	pub name: String,
	pub members: Vec<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupMember {
	pub position: usize,
	pub in_subset: bool,
}

#[derive(Clone, Debug)]
pub struct GroupEntry<'a> {
	pub name: &'a str,
	pub members: Vec<GroupMember>,
	pub in_subset_count: usize,
}
impl GroupEntry<'_> {
	pub fn is_visible(&self) -> bool {
		self.in_subset_count > 0
	}

	/// Row label over every member of the study, filtered or not.
	pub fn label(&self) -> String {
		let count = self.members.len();

		format!("{count} variable{}", if count == 1 { "" } else { "s" })
	}
}

#[derive(Clone, Debug)]
pub struct GroupView<'a> {
	groups: Vec<GroupEntry<'a>>,
}
impl<'a> GroupView<'a> {
	pub fn all(&self) -> &[GroupEntry<'a>] {
		&self.groups
	}

	pub fn visible(&self) -> impl Iterator<Item = &GroupEntry<'a>> {
		self.groups.iter().filter(|group| group.is_visible())
	}

	pub fn visible_count(&self) -> usize {
		self.visible().count()
	}

	pub fn total_groups(&self) -> usize {
		self.groups.len()
	}
}

#[derive(Clone, Debug, Default)]
pub struct GroupAggregator {
	groups: Vec<Group>,
}
impl GroupAggregator {
	pub fn new(dataset: &Dataset) -> Self {
		let mut by_name: AHashMap<&str, usize> = AHashMap::new();
		let mut groups: Vec<Group> = Vec::new();

		for (position, item) in dataset.items().iter().enumerate() {
			let slot = *by_name.entry(item.study_name.as_str()).or_insert_with(|| {
				groups.push(Group { name: item.study_name.clone(), members: Vec::new() });

				groups.len() - 1
			});

			groups[slot].members.push(position);
		}

		Self { groups }
	}

	pub fn groups(&self) -> &[Group] {
		&self.groups
	}

	pub fn group(&self, name: &str) -> Option<&Group> {
		self.groups.iter().find(|group| group.name == name)
	}

	pub fn groups_containing(&self, subset: &Subset) -> GroupView<'_> {
		let members: AHashSet<usize> = subset.positions().iter().copied().collect();
		let groups = self
			.groups
			.iter()
			.map(|group| {
				let flagged: Vec<GroupMember> = group
					.members
					.iter()
					.map(|&position| GroupMember { position, in_subset: members.contains(&position) })
					.collect();
				let in_subset_count = flagged.iter().filter(|member| member.in_subset).count();

				GroupEntry { name: group.name.as_str(), members: flagged, in_subset_count }
			})
			.collect();

		GroupView { groups }
	}
}
