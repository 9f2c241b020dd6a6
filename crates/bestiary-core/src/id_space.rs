//! Append-only identifier spaces
//!
//! An [`IdSpace`] is the ordered list of names in one namespace. A name's
//! position is its ordinal. Removed content is kept as a retired entry so
//! every other ordinal stays put; new permanent names go right before the
//! generated boundary.
//!
//! ```text
//! 0            num_permanent()                 len()
//! | permanent + retired | generated / variant ids |
//!                       ^ boundary
//! ```

use crate::error::IdSpaceError;
use crate::identity::Ident;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Status of one slot in an identifier space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdStatus<I> {
    /// Hand-authored content with a permanent ordinal
    Permanent,
    /// Removed content kept so old saves still resolve
    Retired,
    /// Runtime-assigned variant id; base stats come from `template` if set
    Generated { template: Option<I> },
}

/// One named slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdEntry<I> {
    pub name: String,
    pub status: IdStatus<I>,
}

/// A dense, ordered namespace of ids
#[derive(Debug, Clone)]
pub struct IdSpace<I: Ident> {
    entries: Vec<IdEntry<I>>,
    by_name: IndexMap<String, I>,
    num_permanent: usize,
    max_permanent: I,
}

impl<I: Ident> IdSpace<I> {
    /// Start building a new identifier space
    pub fn builder() -> IdSpaceBuilder<I> {
        IdSpaceBuilder::new()
    }

    /// Whether `id` addresses a slot in this space
    pub fn is_valid(&self, id: I) -> bool {
        id.index() < self.entries.len()
    }

    /// Whether `id` is a retired (tombstoned) slot
    pub fn is_tombstoned(&self, id: I) -> bool {
        matches!(self.status(id), Some(IdStatus::Retired))
    }

    /// Whether `id` lies in the generated sub-range
    pub fn is_generated(&self, id: I) -> bool {
        matches!(self.status(id), Some(IdStatus::Generated { .. }))
    }

    /// Last hand-authored id; everything after it is generated
    pub fn max_permanent_id(&self) -> I {
        self.max_permanent
    }

    /// Number of slots before the generated boundary
    pub fn num_permanent(&self) -> usize {
        self.num_permanent
    }

    /// Total number of slots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the space is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an id by name; aliases resolve to their target
    pub fn id_of(&self, name: &str) -> Option<I> {
        self.by_name.get(name).copied()
    }

    /// Canonical name of an id
    pub fn name_of(&self, id: I) -> Option<&str> {
        self.entries.get(id.index()).map(|e| e.name.as_str())
    }

    /// Status of an id
    pub fn status(&self, id: I) -> Option<IdStatus<I>> {
        self.entries.get(id.index()).map(|e| e.status)
    }

    /// Template a generated id borrows its base record from
    pub fn template_of(&self, id: I) -> Option<I> {
        match self.status(id) {
            Some(IdStatus::Generated { template }) => template,
            _ => None,
        }
    }

    /// Iterate over all ids in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = (I, &IdEntry<I>)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| I::from_index(index).map(|id| (id, entry)))
    }

    /// Iterate over the permanent and retired ids
    pub fn permanent_ids(&self) -> impl Iterator<Item = I> + '_ {
        self.iter().take(self.num_permanent).map(|(id, _)| id)
    }

    /// Iterate over the retired ids
    pub fn tombstones(&self) -> impl Iterator<Item = I> + '_ {
        self.iter()
            .filter(|(_, entry)| entry.status == IdStatus::Retired)
            .map(|(id, _)| id)
    }
}

#[derive(Debug, Clone)]
enum Pending {
    Permanent,
    Retired,
    Boundary,
    Generated { template: Option<String> },
}

/// Builder for [`IdSpace`]
///
/// Entries are appended in ordinal order. Exactly one `boundary()` call
/// separates permanent ids from generated ones.
#[derive(Debug, Clone)]
pub struct IdSpaceBuilder<I> {
    entries: Vec<(String, Pending)>,
    aliases: Vec<(String, String)>,
    _marker: PhantomData<I>,
}

impl<I: Ident> IdSpaceBuilder<I> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            aliases: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Append a permanent id
    pub fn permanent(mut self, name: impl Into<String>) -> Self {
        self.entries.push((name.into(), Pending::Permanent));
        self
    }

    /// Append a retired id
    pub fn retired(mut self, name: impl Into<String>) -> Self {
        self.entries.push((name.into(), Pending::Retired));
        self
    }

    /// Mark the end of the permanent range
    pub fn boundary(mut self) -> Self {
        self.entries.push((String::new(), Pending::Boundary));
        self
    }

    /// Append a generated id, optionally backed by a permanent template
    pub fn generated(mut self, name: impl Into<String>, template: Option<&str>) -> Self {
        self.entries.push((
            name.into(),
            Pending::Generated {
                template: template.map(str::to_string),
            },
        ));
        self
    }

    /// Add a second name for an existing id
    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), target.into()));
        self
    }

    /// Validate and freeze the identifier space
    pub fn build(self) -> Result<IdSpace<I>, IdSpaceError> {
        let namespace = I::NAMESPACE;
        let mut entries: Vec<IdEntry<I>> = Vec::with_capacity(self.entries.len());
        let mut by_name: IndexMap<String, I> = IndexMap::new();
        let mut num_permanent = None;
        let mut templates = Vec::new();

        for (name, pending) in self.entries {
            let status = match pending {
                Pending::Boundary => {
                    if num_permanent.is_none() {
                        num_permanent = Some(entries.len());
                    }
                    continue;
                }
                Pending::Permanent | Pending::Retired if num_permanent.is_some() => {
                    return Err(IdSpaceError::PermanentAfterBoundary { namespace, name });
                }
                Pending::Permanent => IdStatus::Permanent,
                Pending::Retired => IdStatus::Retired,
                Pending::Generated { template } => {
                    if num_permanent.is_none() {
                        num_permanent = Some(entries.len());
                    }
                    if let Some(template) = template {
                        templates.push((entries.len(), name.clone(), template));
                    }
                    IdStatus::Generated { template: None }
                }
            };

            let id = I::from_index(entries.len()).ok_or(IdSpaceError::Overflow {
                namespace,
                count: entries.len() + 1,
            })?;
            if by_name.insert(name.clone(), id).is_some() {
                return Err(IdSpaceError::DuplicateName { namespace, name });
            }
            entries.push(IdEntry { name, status });
        }

        let num_permanent = num_permanent.ok_or(IdSpaceError::MissingBoundary(namespace))?;
        if num_permanent == 0 {
            return Err(IdSpaceError::EmptyPermanentRange(namespace));
        }
        let max_permanent = I::from_index(num_permanent - 1).ok_or(IdSpaceError::Overflow {
            namespace,
            count: num_permanent,
        })?;

        for (position, name, template) in templates {
            let target = by_name
                .get(&template)
                .copied()
                .ok_or_else(|| IdSpaceError::UnknownTemplate {
                    namespace,
                    name: name.clone(),
                    template: template.clone(),
                })?;
            if entries[target.index()].status != IdStatus::Permanent {
                return Err(IdSpaceError::TemplateNotPermanent {
                    namespace,
                    name,
                    template,
                });
            }
            entries[position].status = IdStatus::Generated {
                template: Some(target),
            };
        }

        for (alias, target) in self.aliases {
            let id = by_name
                .get(&target)
                .copied()
                .ok_or_else(|| IdSpaceError::UnknownAliasTarget {
                    namespace,
                    alias: alias.clone(),
                    target,
                })?;
            if by_name.insert(alias.clone(), id).is_some() {
                return Err(IdSpaceError::DuplicateName {
                    namespace,
                    name: alias,
                });
            }
        }

        Ok(IdSpace {
            entries,
            by_name,
            num_permanent,
            max_permanent,
        })
    }
}

impl<I: Ident> Default for IdSpaceBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}
