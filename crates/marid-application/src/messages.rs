//! User-facing (Arabic) messages shown when a workflow step fails.

use marid_core::error::MaridError;
use marid_core::generation::GenerationOperation;

pub const CONTENT_FAILED: &str = "حدث خطأ أثناء توليد المحتوى. الرجاء المحاولة مرة أخرى.";
/// Appended to the displayed error when only the image step failed.
pub const IMAGE_FAILED_NOTE: &str = " (فشل توليد الصورة)";
pub const IDEAS_FAILED: &str = "حدث خطأ أثناء توليد الأفكار. جرب مرة ثانية.";
pub const SUB_TOPICS_FAILED: &str = "فشل في توليد المحاور الرئيسية. حاول مرة أخرى.";
pub const SCAMPER_FAILED: &str = "حدث خطأ أثناء استلهام الخطافات. الرجاء المحاولة مرة أخرى.";
pub const TREND_FAILED: &str = "فشل توليد المسودة. الرجاء المحاولة مرة أخرى.";
pub const ANALYSIS_FAILED: &str = "فشل تحليل الصفحة. الرجاء المحاولة مرة أخرى.";
pub const NODE_CONTENT_FAILED: &str = "فشل توليد المحتوى.";
pub const NODE_IMAGE_FAILED: &str = "فشل توليد الصورة.";

pub const TREND_DESCRIPTION_REQUIRED: &str = "الرجاء إدخال وصف للترند.";
pub const PROFILE_URL_INVALID: &str = "الرجاء إدخال رابط صفحة انستجرام صالح.";
pub const AGENCY_FIELDS_REQUIRED: &str = "الرجاء إدخال اسم الوكالة ورابط الموقع على الأقل.";
pub const FIELDS_REQUIRED: &str = "الرجاء تعبئة جميع الحقول المطلوبة.";
pub const BUSY: &str = "يوجد طلب قيد التنفيذ. الرجاء الانتظار.";
pub const NOT_FOUND: &str = "العنصر غير موجود.";
pub const UNEXPECTED: &str = "حدث خطأ غير متوقع.";

/// Message for a failed generation, by operation.
pub fn generation_failed(operation: GenerationOperation) -> &'static str {
    match operation {
        GenerationOperation::GenerateContentStrategy => CONTENT_FAILED,
        GenerationOperation::GenerateImage => NODE_IMAGE_FAILED,
        GenerationOperation::GenerateIdeasFromKeyword
        | GenerationOperation::GenerateContentIdeasForNode => IDEAS_FAILED,
        GenerationOperation::GenerateMindMapSubTopics => SUB_TOPICS_FAILED,
        GenerationOperation::GenerateScamperIdeas => SCAMPER_FAILED,
        GenerationOperation::AnalyzeInstagramProfile => ANALYSIS_FAILED,
        GenerationOperation::GenerateTrendDraftPost => TREND_FAILED,
    }
}

/// Message for an error that stopped an action before any AI call.
pub fn rejected(error: &MaridError) -> &'static str {
    match error {
        MaridError::Validation { field } => match *field {
            "description" => TREND_DESCRIPTION_REQUIRED,
            "profile_url" => PROFILE_URL_INVALID,
            "name" | "website" => AGENCY_FIELDS_REQUIRED,
            _ => FIELDS_REQUIRED,
        },
        MaridError::InvalidState(_) => BUSY,
        MaridError::NotFound { .. } => NOT_FOUND,
        MaridError::Generation { operation, .. } => generation_failed(*operation),
        _ => UNEXPECTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_operation_has_message() {
        use strum::IntoEnumIterator;
        for op in GenerationOperation::iter() {
            assert!(!generation_failed(op).is_empty());
        }
        assert_eq!(
            generation_failed(GenerationOperation::GenerateTrendDraftPost),
            TREND_FAILED
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(rejected(&MaridError::validation("profile_url")), PROFILE_URL_INVALID);
        assert_eq!(rejected(&MaridError::validation("user_idea")), FIELDS_REQUIRED);
    }
}
