use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        badge::{AwardBadgeDto, BadgeDto, CreateBadgeDto, UserBadgeDto},
        issue::{CreateIssueDto, IssueDto, UpdateIssueDto},
        lab_responsibility::{
            AssignLabResponsibilityDto, HandoffDto, HandoffResultDto, LabResponsibilityDto,
        },
        notification::{NotificationDto, SendNotificationDto, SentCountDto, UnreadCountDto},
        project::{BoardColumnDto, BoardDto, CreateProjectDto, ProjectDto, UpdateProjectDto},
        reward::{CreateRewardDto, PurchaseDto, RewardDto, UpdateRewardDto},
        schedule::{CreateScheduleDto, ScheduleDto, UpdateScheduleDto},
        task::{CreateTaskDto, MoveTaskDto, TaskDto, UpdateTaskDto},
        user::{
            AdjustPointsDto, ApproveUserDto, CurrentUserDto, LoginDto, PaginatedUsersDto,
            RegisterDto, SetRoleDto, UserDto,
        },
        weekly_hours::{HoursSummaryDto, WeeklyHoursDto, WeeklyResetDto, WeeklyResetRequestDto},
        weekly_report::{
            ReviewWeeklyReportDto, SubmitWeeklyReportDto, UpdateWeeklyReportDto,
            WeeklyReportDto,
        },
        work_session::{PaginatedWorkSessionsDto, StartWorkSessionDto, WorkSessionDto},
    },
    server::{
        controller::{
            auth, badge, health, issue, lab_responsibility, notification, project, reward,
            schedule, task, user, weekly_hours, weekly_report, work_session,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "labhub", description = "Lab and volunteer management API"),
    paths(
        health::health,
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        user::get_users,
        user::get_pending_users,
        user::get_user,
        user::approve_user,
        user::reject_user,
        user::set_user_role,
        user::delete_user,
        user::adjust_user_points,
        project::get_projects,
        project::create_project,
        project::get_project,
        project::update_project,
        project::delete_project,
        project::get_project_board,
        task::create_task,
        task::get_my_tasks,
        task::get_task,
        task::update_task,
        task::move_task,
        task::delete_task,
        work_session::start_work_session,
        work_session::stop_work_session,
        work_session::get_active_work_session,
        work_session::get_user_work_sessions,
        weekly_hours::get_user_hours,
        weekly_hours::run_weekly_reset,
        weekly_report::submit_weekly_report,
        weekly_report::get_my_weekly_reports,
        weekly_report::get_weekly_reports,
        weekly_report::get_weekly_report,
        weekly_report::update_weekly_report,
        weekly_report::review_weekly_report,
        reward::get_rewards,
        reward::create_reward,
        reward::update_reward,
        reward::archive_reward,
        reward::redeem_reward,
        reward::get_my_purchases,
        reward::get_purchases,
        reward::fulfil_purchase,
        reward::cancel_purchase,
        schedule::get_schedules,
        schedule::get_my_schedules,
        schedule::create_schedule,
        schedule::update_schedule,
        schedule::delete_schedule,
        lab_responsibility::get_current_lab_responsibility,
        lab_responsibility::get_lab_responsibilities,
        lab_responsibility::assign_lab_responsibility,
        lab_responsibility::handoff_lab_responsibility,
        lab_responsibility::delete_lab_responsibility,
        notification::get_notifications,
        notification::get_unread_count,
        notification::mark_notification_read,
        notification::mark_all_notifications_read,
        notification::delete_notification,
        notification::send_notification,
        badge::get_badges,
        badge::create_badge,
        badge::delete_badge,
        badge::award_badge,
        badge::revoke_badge,
        badge::get_user_badges,
        issue::report_issue,
        issue::get_issues,
        issue::get_issue,
        issue::update_issue,
        issue::delete_issue,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        RegisterDto,
        LoginDto,
        UserDto,
        CurrentUserDto,
        PaginatedUsersDto,
        ApproveUserDto,
        SetRoleDto,
        AdjustPointsDto,
        ProjectDto,
        CreateProjectDto,
        UpdateProjectDto,
        BoardDto,
        BoardColumnDto,
        TaskDto,
        CreateTaskDto,
        UpdateTaskDto,
        MoveTaskDto,
        WorkSessionDto,
        StartWorkSessionDto,
        PaginatedWorkSessionsDto,
        WeeklyHoursDto,
        HoursSummaryDto,
        WeeklyResetRequestDto,
        WeeklyResetDto,
        WeeklyReportDto,
        SubmitWeeklyReportDto,
        UpdateWeeklyReportDto,
        ReviewWeeklyReportDto,
        RewardDto,
        CreateRewardDto,
        UpdateRewardDto,
        PurchaseDto,
        ScheduleDto,
        CreateScheduleDto,
        UpdateScheduleDto,
        LabResponsibilityDto,
        AssignLabResponsibilityDto,
        HandoffDto,
        HandoffResultDto,
        NotificationDto,
        SendNotificationDto,
        UnreadCountDto,
        SentCountDto,
        BadgeDto,
        CreateBadgeDto,
        AwardBadgeDto,
        UserBadgeDto,
        IssueDto,
        CreateIssueDto,
        UpdateIssueDto,
    )),
    tags(
        (name = health::HEALTH_TAG, description = "Liveness"),
        (name = auth::AUTH_TAG, description = "Registration, login and session"),
        (name = user::USER_TAG, description = "Accounts, approval, roles and points"),
        (name = project::PROJECT_TAG, description = "Projects and Kanban boards"),
        (name = task::TASK_TAG, description = "Tasks on the Kanban board"),
        (name = work_session::WORK_SESSION_TAG, description = "Work timers"),
        (name = weekly_hours::WEEKLY_HOURS_TAG, description = "Weekly hour counters and reset"),
        (name = weekly_report::WEEKLY_REPORT_TAG, description = "Weekly reports and review"),
        (name = reward::REWARD_TAG, description = "Reward catalogue and purchases"),
        (name = schedule::SCHEDULE_TAG, description = "Personal schedule slots"),
        (name = lab_responsibility::LAB_RESPONSIBILITY_TAG, description = "On-duty assignments and hand-off"),
        (name = notification::NOTIFICATION_TAG, description = "In-app notifications"),
        (name = badge::BADGE_TAG, description = "Badges and awards"),
        (name = issue::ISSUE_TAG, description = "Issue reports and triage"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        // auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // users
        .route("/api/users", get(user::get_users))
        .route("/api/users/pending", get(user::get_pending_users))
        .route(
            "/api/users/{user_id}",
            get(user::get_user).delete(user::delete_user),
        )
        .route("/api/users/{user_id}/approve", post(user::approve_user))
        .route("/api/users/{user_id}/reject", post(user::reject_user))
        .route("/api/users/{user_id}/role", put(user::set_user_role))
        .route("/api/users/{user_id}/points", post(user::adjust_user_points))
        .route(
            "/api/users/{user_id}/work-sessions",
            get(work_session::get_user_work_sessions),
        )
        .route("/api/users/{user_id}/hours", get(weekly_hours::get_user_hours))
        .route("/api/users/{user_id}/badges", get(badge::get_user_badges))
        // projects and tasks
        .route(
            "/api/projects",
            get(project::get_projects).post(project::create_project),
        )
        .route(
            "/api/projects/{project_id}",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/api/projects/{project_id}/board",
            get(project::get_project_board),
        )
        .route("/api/tasks", post(task::create_task))
        .route("/api/tasks/mine", get(task::get_my_tasks))
        .route(
            "/api/tasks/{task_id}",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        )
        .route("/api/tasks/{task_id}/status", put(task::move_task))
        // work sessions and hours
        .route(
            "/api/work-sessions/start",
            post(work_session::start_work_session),
        )
        .route(
            "/api/work-sessions/stop",
            post(work_session::stop_work_session),
        )
        .route(
            "/api/work-sessions/active",
            get(work_session::get_active_work_session),
        )
        .route(
            "/api/admin/weekly-reset",
            post(weekly_hours::run_weekly_reset),
        )
        // weekly reports
        .route(
            "/api/weekly-reports",
            get(weekly_report::get_weekly_reports).post(weekly_report::submit_weekly_report),
        )
        .route(
            "/api/weekly-reports/mine",
            get(weekly_report::get_my_weekly_reports),
        )
        .route(
            "/api/weekly-reports/{report_id}",
            get(weekly_report::get_weekly_report).put(weekly_report::update_weekly_report),
        )
        .route(
            "/api/weekly-reports/{report_id}/review",
            post(weekly_report::review_weekly_report),
        )
        // rewards and purchases
        .route(
            "/api/rewards",
            get(reward::get_rewards).post(reward::create_reward),
        )
        .route(
            "/api/rewards/{reward_id}",
            put(reward::update_reward).delete(reward::archive_reward),
        )
        .route("/api/rewards/{reward_id}/redeem", post(reward::redeem_reward))
        .route("/api/purchases", get(reward::get_purchases))
        .route("/api/purchases/mine", get(reward::get_my_purchases))
        .route(
            "/api/purchases/{purchase_id}/fulfil",
            post(reward::fulfil_purchase),
        )
        .route(
            "/api/purchases/{purchase_id}/cancel",
            post(reward::cancel_purchase),
        )
        // schedules
        .route(
            "/api/schedules",
            get(schedule::get_schedules).post(schedule::create_schedule),
        )
        .route("/api/schedules/mine", get(schedule::get_my_schedules))
        .route(
            "/api/schedules/{schedule_id}",
            put(schedule::update_schedule).delete(schedule::delete_schedule),
        )
        // lab responsibility
        .route(
            "/api/lab-responsibility",
            get(lab_responsibility::get_lab_responsibilities)
                .post(lab_responsibility::assign_lab_responsibility),
        )
        .route(
            "/api/lab-responsibility/current",
            get(lab_responsibility::get_current_lab_responsibility),
        )
        .route(
            "/api/lab-responsibility/handoff",
            post(lab_responsibility::handoff_lab_responsibility),
        )
        .route(
            "/api/lab-responsibility/{assignment_id}",
            delete(lab_responsibility::delete_lab_responsibility),
        )
        // notifications
        .route("/api/notifications", get(notification::get_notifications))
        .route(
            "/api/notifications/unread-count",
            get(notification::get_unread_count),
        )
        .route(
            "/api/notifications/read-all",
            post(notification::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/send",
            post(notification::send_notification),
        )
        .route(
            "/api/notifications/{notification_id}",
            delete(notification::delete_notification),
        )
        .route(
            "/api/notifications/{notification_id}/read",
            post(notification::mark_notification_read),
        )
        // badges
        .route(
            "/api/badges",
            get(badge::get_badges).post(badge::create_badge),
        )
        .route(
            "/api/badges/{badge_id}",
            delete(badge::delete_badge),
        )
        .route("/api/badges/{badge_id}/award", post(badge::award_badge))
        .route(
            "/api/badges/{badge_id}/award/{user_id}",
            delete(badge::revoke_badge),
        )
        // issues
        .route(
            "/api/issues",
            get(issue::get_issues).post(issue::report_issue),
        )
        .route(
            "/api/issues/{issue_id}",
            get(issue::get_issue)
                .put(issue::update_issue)
                .delete(issue::delete_issue),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths;

        for path in [
            "/api/auth/login",
            "/api/users/{user_id}/hours",
            "/api/tasks/{task_id}/status",
            "/api/admin/weekly-reset",
            "/api/rewards/{reward_id}/redeem",
            "/api/lab-responsibility/handoff",
            "/api/issues/{issue_id}",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
    }
}
