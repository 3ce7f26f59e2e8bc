//! Read-only view of a guild's owner, roles and members.
//!
//! A `DirectorySnapshot` is assembled from Discord API responses at the moment a password
//! is requested and is used only to answer the authorization question for that request.

use std::collections::HashMap;

use serenity::all::{GuildId, Member, Role, RoleId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRole {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryMember {
    pub user_id: u64,
    pub role_ids: Vec<u64>,
}

impl DirectoryMember {
    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot {
    pub guild_id: u64,
    pub owner_id: u64,
    pub roles: Vec<DirectoryRole>,
    pub members: Vec<DirectoryMember>,
}

impl DirectorySnapshot {
    /// Builds a snapshot from the pieces of a Discord guild response.
    ///
    /// Roles come from the guild's role map and members from the guild member list
    /// endpoint, since guild responses from the REST API do not carry members.
    ///
    /// # Arguments
    /// - `guild_id` - ID of the guild the snapshot describes
    /// - `owner_id` - ID of the guild owner
    /// - `roles` - Guild roles keyed by role ID
    /// - `members` - Guild members with their assigned role IDs
    ///
    /// # Returns
    /// - `DirectorySnapshot` - Snapshot with roles sorted by ID for stable lookup
    pub fn from_discord(
        guild_id: GuildId,
        owner_id: UserId,
        roles: &HashMap<RoleId, Role>,
        members: &[Member],
    ) -> Self {
        let mut roles: Vec<DirectoryRole> = roles
            .values()
            .map(|role| DirectoryRole {
                id: role.id.get(),
                name: role.name.clone(),
            })
            .collect();
        roles.sort_by_key(|role| role.id);

        let members = members
            .iter()
            .map(|member| DirectoryMember {
                user_id: member.user.id.get(),
                role_ids: member.roles.iter().map(|id| id.get()).collect(),
            })
            .collect();

        Self {
            guild_id: guild_id.get(),
            owner_id: owner_id.get(),
            roles,
            members,
        }
    }

    /// Looks up a role ID by exact name match.
    ///
    /// # Returns
    /// - `Some(u64)` - ID of the first role with the given name
    /// - `None` - No role in the guild has that name
    pub fn role_id_by_name(&self, name: &str) -> Option<u64> {
        self.roles
            .iter()
            .find(|role| role.name == name)
            .map(|role| role.id)
    }

    /// Finds a member of the guild by user ID.
    pub fn member(&self, user_id: u64) -> Option<&DirectoryMember> {
        self.members.iter().find(|member| member.user_id == user_id)
    }

    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owner_id == user_id
    }
}
