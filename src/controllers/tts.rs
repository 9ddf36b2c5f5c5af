use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    domain::tts::{
        Gender, LanguageCode, SynthesizeRequest, SynthesizeResponse, TtsService, TtsServiceApi,
        VoiceTable,
    },
    error::{AppError, AppResult},
    infrastructure::storage::AudioStorage,
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
    storage: Arc<AudioStorage>,
    voices: VoiceTable,
    max_text_length: usize,
}

impl TtsController {
    pub fn new(
        tts_service: Arc<TtsService>,
        storage: Arc<AudioStorage>,
        voices: VoiceTable,
        max_text_length: usize,
    ) -> Self {
        Self {
            tts_service,
            storage,
            voices,
            max_text_length,
        }
    }

    /// Shared validation-and-synthesis flow for the text and upload endpoints
    async fn run_synthesis(
        &self,
        text: &str,
        language_tag: Option<&str>,
        gender: Option<Gender>,
    ) -> AppResult<SynthesizeResponse> {
        if text.trim().is_empty() {
            return Err(AppError::BadRequest("Text is required".to_string()));
        }

        if text.chars().count() > self.max_text_length {
            return Err(AppError::PayloadTooLarge(format!(
                "Text exceeds maximum length of {}",
                self.max_text_length
            )));
        }

        let language = LanguageCode::from_tag(language_tag.unwrap_or("auto"));
        let gender = gender.unwrap_or_default();

        let result = self
            .tts_service
            .synthesize(text, language, gender)
            .await
            .map_err(AppError::from)?;

        Ok(SynthesizeResponse {
            success: true,
            download_url: format!("/download/{}", result.filename),
            filename: result.filename,
            duration_ms: result.duration_ms,
            text_length: text.chars().count(),
            sentences_count: result.sentence_count,
        })
    }

    /// POST /synthesize - Convert bilingual text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<Json<SynthesizeResponse>> {
        controller
            .run_synthesis(
                &request.text,
                request.language.as_deref(),
                request.gender,
            )
            .await
            .map(Json)
    }

    /// POST /upload-text - Synthesize the contents of an uploaded .txt file
    pub async fn upload_text(
        State(controller): State<Arc<TtsController>>,
        mut multipart: Multipart,
    ) -> AppResult<Json<SynthesizeResponse>> {
        let mut text = None;
        let mut language = None;
        let mut gender = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            match field.name().unwrap_or_default() {
                "file" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    if !filename.ends_with(".txt") {
                        return Err(AppError::BadRequest(
                            "Only .txt files are supported".to_string(),
                        ));
                    }
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    let content = String::from_utf8(bytes.to_vec()).map_err(|_| {
                        AppError::BadRequest(
                            "File encoding not supported. Use UTF-8".to_string(),
                        )
                    })?;
                    text = Some(content);
                }
                "language" => {
                    language = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| AppError::BadRequest(e.to_string()))?,
                    );
                }
                "gender" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    gender = Some(match value.as_str() {
                        "male" => Gender::Male,
                        _ => Gender::Female,
                    });
                }
                _ => {}
            }
        }

        let text =
            text.ok_or_else(|| AppError::BadRequest("A .txt file is required".to_string()))?;

        controller
            .run_synthesis(&text, language.as_deref(), gender)
            .await
            .map(Json)
    }

    /// GET /voices - Configured voice options
    pub async fn voices(
        State(controller): State<Arc<TtsController>>,
    ) -> Json<serde_json::Value> {
        let voices = &controller.voices;
        Json(json!({
            "voices": {
                "arabic": { "male": voices.ar_male, "female": voices.ar_female },
                "english": { "male": voices.en_male, "female": voices.en_female },
            },
            "languages": ["ar", "en", "auto"],
            "genders": ["male", "female"],
        }))
    }

    /// GET /download/:filename - Download a generated audio file
    pub async fn download(
        State(controller): State<Arc<TtsController>>,
        Path(filename): Path<String>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let path = controller
            .storage
            .resolve(&filename)
            .ok_or_else(|| AppError::NotFound("Audio file not found".to_string()))?;

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/wav".parse().unwrap());
        headers.insert(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename)
                .parse()
                .unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(bytes)))
    }

    /// GET /audio-files - List generated audio files
    pub async fn list_audio_files(
        State(controller): State<Arc<TtsController>>,
    ) -> AppResult<Json<serde_json::Value>> {
        let files = controller
            .storage
            .list()
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let count = files.len();
        Ok(Json(json!({
            "files": files,
            "count": count,
        })))
    }

    /// DELETE /audio-files/:filename - Delete a generated audio file
    pub async fn delete_audio_file(
        State(controller): State<Arc<TtsController>>,
        Path(filename): Path<String>,
    ) -> AppResult<Json<serde_json::Value>> {
        let deleted = controller
            .storage
            .delete(&filename)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        if !deleted {
            return Err(AppError::NotFound("File not found".to_string()));
        }

        Ok(Json(json!({
            "success": true,
            "message": format!("Deleted {}", filename),
        })))
    }
}
