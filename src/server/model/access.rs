//! Roles, account states and the role matrix.
//!
//! The role matrix is a static table mapping every guarded feature to the roles
//! allowed to use it. Handlers never compare roles directly; they ask the matrix
//! through `AuthGuard` so that changing who may do what is a one-line edit here.

use std::fmt;

string_enum! {
    /// Role held by an account. Stored as its lowercase name.
    Role {
        Admin => "admin",
        Manager => "manager",
        Member => "member",
        Volunteer => "volunteer",
    }
}

string_enum! {
    /// Approval state of an account.
    ///
    /// Only approved accounts pass `AuthGuard`; new registrations start pending.
    AccountStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

/// Every capability checked by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    ViewUsers,
    ApproveUsers,
    ManageUsers,
    ViewProjects,
    ManageProjects,
    ManageTasks,
    TrackWork,
    ViewAllWorkSessions,
    RunWeeklyReset,
    SubmitWeeklyReports,
    ReviewWeeklyReports,
    RedeemRewards,
    ManageRewards,
    ManagePurchases,
    AdjustPoints,
    ViewSchedules,
    ManageSchedules,
    ManageLabResponsibility,
    SendNotifications,
    ManageBadges,
    ReportIssues,
    ManageIssues,
}

impl Feature {
    pub const ALL: [Feature; 22] = [
        Feature::ViewUsers,
        Feature::ApproveUsers,
        Feature::ManageUsers,
        Feature::ViewProjects,
        Feature::ManageProjects,
        Feature::ManageTasks,
        Feature::TrackWork,
        Feature::ViewAllWorkSessions,
        Feature::RunWeeklyReset,
        Feature::SubmitWeeklyReports,
        Feature::ReviewWeeklyReports,
        Feature::RedeemRewards,
        Feature::ManageRewards,
        Feature::ManagePurchases,
        Feature::AdjustPoints,
        Feature::ViewSchedules,
        Feature::ManageSchedules,
        Feature::ManageLabResponsibility,
        Feature::SendNotifications,
        Feature::ManageBadges,
        Feature::ReportIssues,
        Feature::ManageIssues,
    ];

    /// Snake-case name returned to clients in the permission list.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::ViewUsers => "view_users",
            Feature::ApproveUsers => "approve_users",
            Feature::ManageUsers => "manage_users",
            Feature::ViewProjects => "view_projects",
            Feature::ManageProjects => "manage_projects",
            Feature::ManageTasks => "manage_tasks",
            Feature::TrackWork => "track_work",
            Feature::ViewAllWorkSessions => "view_all_work_sessions",
            Feature::RunWeeklyReset => "run_weekly_reset",
            Feature::SubmitWeeklyReports => "submit_weekly_reports",
            Feature::ReviewWeeklyReports => "review_weekly_reports",
            Feature::RedeemRewards => "redeem_rewards",
            Feature::ManageRewards => "manage_rewards",
            Feature::ManagePurchases => "manage_purchases",
            Feature::AdjustPoints => "adjust_points",
            Feature::ViewSchedules => "view_schedules",
            Feature::ManageSchedules => "manage_schedules",
            Feature::ManageLabResponsibility => "manage_lab_responsibility",
            Feature::SendNotifications => "send_notifications",
            Feature::ManageBadges => "manage_badges",
            Feature::ReportIssues => "report_issues",
            Feature::ManageIssues => "manage_issues",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use Role::{Admin, Manager, Member, Volunteer};

const EVERYONE: &[Role] = &[Admin, Manager, Member, Volunteer];
const STAFF: &[Role] = &[Admin, Manager, Member];
const LEADS: &[Role] = &[Admin, Manager];
const ADMINS: &[Role] = &[Admin];

/// The role matrix.
static ROLE_MATRIX: &[(Feature, &[Role])] = &[
    (Feature::ViewUsers, LEADS),
    (Feature::ApproveUsers, LEADS),
    (Feature::ManageUsers, ADMINS),
    (Feature::ViewProjects, EVERYONE),
    (Feature::ManageProjects, LEADS),
    (Feature::ManageTasks, STAFF),
    (Feature::TrackWork, EVERYONE),
    (Feature::ViewAllWorkSessions, LEADS),
    (Feature::RunWeeklyReset, ADMINS),
    (Feature::SubmitWeeklyReports, EVERYONE),
    (Feature::ReviewWeeklyReports, LEADS),
    (Feature::RedeemRewards, EVERYONE),
    (Feature::ManageRewards, LEADS),
    (Feature::ManagePurchases, LEADS),
    (Feature::AdjustPoints, LEADS),
    (Feature::ViewSchedules, EVERYONE),
    (Feature::ManageSchedules, LEADS),
    (Feature::ManageLabResponsibility, LEADS),
    (Feature::SendNotifications, LEADS),
    (Feature::ManageBadges, LEADS),
    (Feature::ReportIssues, EVERYONE),
    (Feature::ManageIssues, LEADS),
];

/// Roles permitted to use `feature`.
///
/// Falls back to admin-only for a feature missing from the table, which the
/// tests below rule out.
pub fn allowed_roles(feature: Feature) -> &'static [Role] {
    ROLE_MATRIX
        .iter()
        .find(|(f, _)| *f == feature)
        .map(|(_, roles)| *roles)
        .unwrap_or(ADMINS)
}

/// Whether `role` may use `feature`. Admins may use everything.
pub fn permits(role: Role, feature: Feature) -> bool {
    role == Role::Admin || allowed_roles(feature).contains(&role)
}

/// All features granted to `role`, in declaration order.
pub fn features_for(role: Role) -> Vec<Feature> {
    Feature::ALL
        .into_iter()
        .filter(|feature| permits(role, *feature))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_covers_every_feature_once() {
        for feature in Feature::ALL {
            let entries = ROLE_MATRIX.iter().filter(|(f, _)| *f == feature).count();
            assert_eq!(entries, 1, "{} has {} entries", feature, entries);
        }
        assert_eq!(ROLE_MATRIX.len(), Feature::ALL.len());
    }

    #[test]
    fn admin_listed_for_every_feature() {
        for feature in Feature::ALL {
            assert!(allowed_roles(feature).contains(&Role::Admin));
            assert!(permits(Role::Admin, feature));
        }
    }

    #[test]
    fn volunteer_cannot_manage() {
        assert!(permits(Role::Volunteer, Feature::TrackWork));
        assert!(permits(Role::Volunteer, Feature::RedeemRewards));
        assert!(!permits(Role::Volunteer, Feature::ManageTasks));
        assert!(!permits(Role::Volunteer, Feature::ApproveUsers));
    }

    #[test]
    fn only_admin_runs_reset() {
        assert_eq!(allowed_roles(Feature::RunWeeklyReset), &[Role::Admin]);
        assert!(!permits(Role::Manager, Feature::RunWeeklyReset));
    }

    #[test]
    fn features_for_admin_is_everything() {
        assert_eq!(features_for(Role::Admin).len(), Feature::ALL.len());
        assert!(features_for(Role::Volunteer).len() < features_for(Role::Member).len());
    }

    #[test]
    fn role_round_trips_through_string() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(*role));
        }
        assert!("owner".parse::<Role>().is_err());
    }
}
