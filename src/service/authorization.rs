use crate::model::directory::DirectorySnapshot;

/// Name of the guild role allowed to request passwords.
pub const STAFF_ROLE_NAME: &str = "staff";

/// Checks whether a user may be issued a password in the given guild.
///
/// The guild owner is always authorized. Any other user must be a current member of the
/// guild and hold the role named [`STAFF_ROLE_NAME`]. If the guild has no such role, only
/// the owner is authorized.
///
/// # Arguments
/// - `directory` - Snapshot of the guild's owner, roles and members
/// - `subject_id` - Discord user ID of the requester
///
/// # Returns
/// - `true` - Requester is the owner or a staff member
/// - `false` - Requester is not in the guild or lacks the staff role
pub fn is_authorized(directory: &DirectorySnapshot, subject_id: u64) -> bool {
    if directory.is_owner(subject_id) {
        return true;
    }

    let Some(staff_role_id) = directory.role_id_by_name(STAFF_ROLE_NAME) else {
        return false;
    };

    directory
        .member(subject_id)
        .is_some_and(|member| member.has_role(staff_role_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::directory::{DirectoryMember, DirectoryRole};

    const OWNER_ID: u64 = 1;
    const STAFF_ID: u64 = 10;
    const MEMBER_ID: u64 = 11;
    const STAFF_ROLE: u64 = 200;
    const MEMBER_ROLE: u64 = 100;

    fn directory() -> DirectorySnapshot {
        DirectorySnapshot {
            guild_id: 900,
            owner_id: OWNER_ID,
            roles: vec![
                DirectoryRole {
                    id: MEMBER_ROLE,
                    name: "member".to_string(),
                },
                DirectoryRole {
                    id: STAFF_ROLE,
                    name: "staff".to_string(),
                },
            ],
            members: vec![
                DirectoryMember {
                    user_id: OWNER_ID,
                    role_ids: Vec::new(),
                },
                DirectoryMember {
                    user_id: STAFF_ID,
                    role_ids: vec![MEMBER_ROLE, STAFF_ROLE],
                },
                DirectoryMember {
                    user_id: MEMBER_ID,
                    role_ids: vec![MEMBER_ROLE],
                },
            ],
        }
    }

    /// Tests that a member holding the staff role is authorized.
    ///
    /// Expected: true
    #[test]
    fn staff_member_is_authorized() {
        assert!(is_authorized(&directory(), STAFF_ID));
    }

    /// Tests that a member holding only the member role is rejected.
    ///
    /// Expected: false
    #[test]
    fn regular_member_is_not_authorized() {
        assert!(!is_authorized(&directory(), MEMBER_ID));
    }

    /// Tests that the guild owner is authorized without any roles.
    ///
    /// Expected: true
    #[test]
    fn owner_is_authorized_without_roles() {
        assert!(is_authorized(&directory(), OWNER_ID));
    }

    /// Tests that a user who is not in the member list is rejected.
    ///
    /// Expected: false
    #[test]
    fn non_member_is_not_authorized() {
        assert!(!is_authorized(&directory(), 999));
    }

    /// Tests a guild that has no staff role at all.
    ///
    /// Verifies that role-name lookup misses do not grant access to members while the
    /// owner keeps access.
    ///
    /// Expected: owner true, everyone else false
    #[test]
    fn guild_without_staff_role_only_authorizes_owner() {
        let mut directory = directory();
        directory.roles.retain(|role| role.name != STAFF_ROLE_NAME);

        assert!(is_authorized(&directory, OWNER_ID));
        assert!(!is_authorized(&directory, STAFF_ID));
    }

    /// Tests that role names are matched exactly.
    ///
    /// Expected: a role named "Staff" does not satisfy the check
    #[test]
    fn role_name_match_is_case_sensitive() {
        let mut directory = directory();
        for role in &mut directory.roles {
            if role.id == STAFF_ROLE {
                role.name = "Staff".to_string();
            }
        }

        assert!(!is_authorized(&directory, STAFF_ID));
    }
}
