use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::admin::model::{
    MigrateLessonsResponse, SeedAuthorDto, SeedAuthorResponse, StatusResponse, WipeResponse,
};
use crate::modules::audit::model::{AuditListResponse, AuditLog, CleanupResponse};
use crate::modules::auth::model::{
    ErrorResponse, LoginRequest, LoginResponse, RegisterRequestDto, RegisterResponse,
};
use crate::modules::classes::model::{
    AccessMode, ClassCourseAccess, ClassListResponse, ClassResponse, CourseAccessResponse,
    CreateClassDto, GrantCourseAccessDto, TeacherClass,
};
use crate::modules::courses::model::{
    Course, CourseListResponse, CourseResponse, CreateCourseDto, ProgressionMode,
    ReassignAuthorDto, ReassignAuthorResponse, UpdateCourseDto,
};
use crate::modules::lessons::model::{
    CompleteLessonResponse, CreateLessonDto, Lesson, LessonListResponse, LessonResponse,
    UpdateLessonDto,
};
use crate::modules::messages::model::{
    Message, MessageResponse, SendMessageDto, ThreadMessage, ThreadResponse,
};
use crate::modules::roles::model::{RoleApprovalResponse, RoleRequestResponse};
use crate::modules::users::model::{ProfileResponse, ResetProgressResponse, Role, UpdateProfileDto, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::reset_progress,
        crate::modules::roles::controller::request_author,
        crate::modules::roles::controller::approve_role,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::reassign_author,
        crate::modules::lessons::controller::create_lesson,
        crate::modules::lessons::controller::get_lessons,
        crate::modules::lessons::controller::get_lesson,
        crate::modules::lessons::controller::update_lesson,
        crate::modules::lessons::controller::delete_lesson,
        crate::modules::lessons::controller::complete_lesson,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::grant_course_access,
        crate::modules::messages::controller::send_message,
        crate::modules::messages::controller::get_thread,
        crate::modules::messages::controller::hide_message,
        crate::modules::audit::controller::list_audit,
        crate::modules::audit::controller::cleanup_audit,
        crate::modules::admin::controller::seed_author,
        crate::modules::admin::controller::migrate_lessons,
        crate::modules::admin::controller::wipe_collection,
        crate::modules::admin::controller::status,
    ),
    components(
        schemas(
            User,
            Role,
            ProfileResponse,
            ResetProgressResponse,
            UpdateProfileDto,
            RegisterRequestDto,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            RoleRequestResponse,
            RoleApprovalResponse,
            Course,
            ProgressionMode,
            CreateCourseDto,
            UpdateCourseDto,
            CourseResponse,
            CourseListResponse,
            ReassignAuthorDto,
            ReassignAuthorResponse,
            Lesson,
            CreateLessonDto,
            UpdateLessonDto,
            LessonResponse,
            LessonListResponse,
            CompleteLessonResponse,
            TeacherClass,
            AccessMode,
            ClassCourseAccess,
            CreateClassDto,
            GrantCourseAccessDto,
            ClassResponse,
            ClassListResponse,
            CourseAccessResponse,
            Message,
            ThreadMessage,
            SendMessageDto,
            MessageResponse,
            ThreadResponse,
            AuditLog,
            AuditListResponse,
            CleanupResponse,
            SeedAuthorDto,
            SeedAuthorResponse,
            MigrateLessonsResponse,
            WipeResponse,
            StatusResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "Profile and progress"),
        (name = "Roles", description = "Role requests and approvals"),
        (name = "Courses", description = "Course management"),
        (name = "Lessons", description = "Lesson management and completion"),
        (name = "Classes", description = "Teacher classes and course access"),
        (name = "Messages", description = "Threaded messaging"),
        (name = "Audit", description = "Audit log and retention"),
        (name = "Admin", description = "Maintenance and migration utilities"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
