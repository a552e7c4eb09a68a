//! OpenAPI document served at `/api-docs/openapi.json`, browsable under `/docs`.
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct TopicDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
pub struct CreateTopicRequest { pub name: String }

#[derive(ToSchema)]
pub struct OptionDoc {
    pub id: i32,
    pub question_id: i32,
    pub text: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

#[derive(ToSchema)]
pub struct QuestionDoc {
    pub id: i32,
    pub text: String,
    pub topic_id: Option<i32>,
    pub image_path: Option<String>,
    pub lecture_reference: Option<String>,
    pub topic_name: Option<String>,
    pub options: Vec<OptionDoc>,
}

#[derive(ToSchema)]
pub struct NewOptionDoc {
    pub text: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

#[derive(ToSchema)]
pub struct CreateQuestionRequest {
    pub text: String,
    pub topic_id: Option<i32>,
    pub image_path: Option<String>,
    pub lecture_reference: Option<String>,
    pub options: Vec<NewOptionDoc>,
}

#[derive(ToSchema)]
pub struct CreatedQuestionDoc { pub id: i32, pub message: String }

#[derive(ToSchema)]
pub struct RecordAttemptRequest { pub question_id: i32, pub is_correct: bool }

#[derive(ToSchema)]
pub struct StatDoc {
    pub id: i32,
    pub question_id: i32,
    pub correct_attempts: i32,
    pub incorrect_attempts: i32,
    pub last_attempt_date: Option<String>,
    pub question_text: String,
    pub topic_name: Option<String>,
    pub success_rate: f64,
}

#[derive(ToSchema)]
pub struct SearchResultsDoc { pub count: usize, pub results: Vec<QuestionDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::topics::list,
        crate::routes::topics::create,
        crate::routes::questions::list,
        crate::routes::questions::create,
        crate::routes::quiz::random,
        crate::routes::stats::record,
        crate::routes::stats::list,
        crate::routes::search::search,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            MessageResponse,
            TopicDoc,
            CreateTopicRequest,
            OptionDoc,
            QuestionDoc,
            NewOptionDoc,
            CreateQuestionRequest,
            CreatedQuestionDoc,
            RecordAttemptRequest,
            StatDoc,
            SearchResultsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "topics"),
        (name = "questions"),
        (name = "quiz"),
        (name = "stats")
    )
)]
pub struct ApiDoc;
