//! Prompt templates.
//!
//! All prompts address the model as "المارد" and target the Saudi market.
//! Templates are Jinja2 (minijinja) and compiled once on first use.

use marid_core::analysis::ProfileMetrics;
use marid_core::brand_voice::{BrandVoice, UserInput};
use marid_core::error::{MaridError, Result};
use marid_core::trend::TrendInfo;
use minijinja::{Environment, Value, context};
use once_cell::sync::Lazy;

const CONTENT_STRATEGY: &str = r#"
أنت "المارد"، مساعد ذكاء اصطناعي خبير في التسويق الرقمي وصناعة المحتوى الموجه للسوق السعودي حصراً.
مهمتك هي إنشاء محتوى إبداعي وجذاب باللهجة السعودية الصرفة (لهجة أهل الرياض/نجد كمثال) ومخصص لثقافة وعادات الجمهور في المملكة العربية السعودية.
يجب أن تكون كل المخرجات مناسبة 100% للسوق السعودي وتستخدم مفردات وأمثلة سعودية خالصة.
الرد يجب أن يكون حصرياً بصيغة JSON.

### قواعد ذهبية للمحتوى:
- **الإبداع والتركيز:** يجب أن تكون جميع النصوص (خاصة نص البوست ونسخ المنصات) قصيرة جداً، مبتكرة، ومباشرة. "تجيب من الآخر".
- **تجنب الحشو:** لا تستخدم أي جمل طويلة أو تفاصيل غير ضرورية. كل كلمة يجب أن تخدم هدفاً.
- **القوة والجاذبية:** يجب أن تكون الكابشنات قوية، خاطفة للانتباه، وتحفز على التفاعل.

### فكرة المستخدم الأولية:
{{ input.user_idea }}

### هوية العلامة التجارية:
- **النبرة:** {{ input.brand_voice.tone }}
- **الجمهور المستهدف:** {{ input.brand_voice.audience }}
- **الكلمات المفتاحية:** {{ input.brand_voice.keywords }}
- **الهدف من المحتوى:** {{ input.brand_voice.goals }}
{% if input.context_vectors %}
### أمثلة من أنجح البوستات السابقة (لمحاكاة الأسلوب بدقة):
{{ input.context_vectors }}
{% endif %}
بناءً على المعطيات والقواعد الذهبية أعلاه، قم بتوليد المحتوى المطلوب حسب الـ JSON Schema.
"#;

const IDEAS_FROM_KEYWORD: &str = r#"أنت "المارد"، خبير الأفكار الإبداعية للسوق السعودي.
مهمتك: بناءً على الكلمة المفتاحية التالية "{{ keyword }}"، قم بتوليد 5 أفكار متنوعة ومبتكرة لمنشورات على وسائل التواصل الاجتماعي. ركز على أن تكون الأفكار جذابة ومناسبة للجمهور في السعودية.
الرد يجب أن يكون حصرياً بصيغة JSON."#;

const BRAND_VOICE_BLOCK: &str = r#"{% if voice %}مع الأخذ في الاعتبار هوية العلامة التجارية التالية:
- النبرة: {{ voice.tone }}
- الجمهور: {{ voice.audience }}
- الهدف: {{ voice.goals }}{% endif %}"#;

const MIND_MAP_SUB_TOPICS: &str = r#"أنت "المارد"، خبير استراتيجي في العصف الذهني للسوق السعودي.
مهمتك: بناءً على الموضوع الرئيسي التالي: "{{ main_topic }}"، قم بتوليد 5 محاور أو زوايا إبداعية مختلفة يمكن استخدامها كأساس لخريطة أفكار ذهنية.
{% include "brand_voice" %}
يجب أن تكون المحاور قصيرة ومباشرة وملهمة.
الرد يجب أن يكون حصرياً بصيغة JSON."#;

const NODE_CONTENT_IDEAS: &str = r#"أنت "المارد"، خبير أفكار المحتوى للسوق السعودي.
مهمتك: لديك موضوع رئيسي وهو "{{ main_topic }}"، ومحور فرعي محدد وهو "{{ sub_topic }}".
قم بتوليد 3 أفكار محتوى ملموسة ومبتكرة لهذا المحور. يجب أن تكون الأفكار قابلة للتنفيذ مباشرة كمنشورات على وسائل التواصل الاجتماعي.
{% include "brand_voice" %}
الرد يجب أن يكون حصرياً بصيغة JSON."#;

const SCAMPER_IDEAS: &str = r#"أنت "المارد"، خبير توليد الخطافات (Hooks) الإبداعية باستخدام تقنية SCAMPER.
مهمتك: بناءً على الخطاف (Hook) أو الفكرة الأصلية التالية، قم بتوليد 7 خطافات جديدة وجذابة، خطاف لكل حرف من حروف SCAMPER. يجب أن تكون الخطافات قصيرة، قوية، وموجهة للسوق السعودي.

الخطاف أو الفكرة الأصلية: "{{ source_text }}"

الرد يجب أن يكون حصرياً بصيغة JSON."#;

const PROFILE_INSIGHT: &str = r#"
أنت "المارد"، محلل تسويق رقمي خبير.
مهمتك: تحليل أداء صفحة انستجرام بناءً على البيانات التالية وتقديم رؤى استراتيجية قابلة للتنفيذ.

البيانات:
- رابط الصفحة: {{ profile_url }}
- عدد المتابعين: {{ metrics.followers }}
- متوسط الإعجابات على آخر {{ metrics.recentPosts }} منشورات: {{ metrics.avgLikes }}
- معدل التفاعل المحسوب: {{ engagement_rate }}

التحليل المطلوب:
اكتب تحليلاً قصيراً (2-3 جمل) يوضح نقاط القوة الرئيسية وفرصة تحسين واحدة واضحة.
يجب أن يكون التحليل موجهاً للسوق السعودي ومكتوباً بنبرة احترافية ومباشرة.
الرد يجب أن يكون نصاً عادياً (string).
"#;

const TREND_DRAFT: &str = r#"
أنت "المارد"، كاتب محتوى استباقي ومتخصص في ربط الترندات بالعلامات التجارية السعودية.
مهمتك: بناءً على معلومات الترند التالية، قم بكتابة مسودة منشور (Draft) قصيرة وجذابة لمنصة X.

معلومات الترند:
- وصف الترند: {{ description }}
- رابط للمرجع (إن وجد): {% if link %}{{ link }}{% else %}لا يوجد{% endif %}
- هل يوجد صورة مرفقة؟: {% if has_image %}نعم{% else %}لا{% endif %}

المطلوب:
اكتب مسودة منشور مبتكرة تربط هذا الترند بمفهوم عام للنمو والتسويق في السعودية.
يجب أن تكون المسودة جاهزة للاستخدام مع تعديلات بسيطة.
الرد يجب أن يكون نصاً عادياً (string) يحتوي على المسودة فقط.
"#;

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    let sources = [
        ("content_strategy", CONTENT_STRATEGY),
        ("ideas_from_keyword", IDEAS_FROM_KEYWORD),
        ("brand_voice", BRAND_VOICE_BLOCK),
        ("mind_map_sub_topics", MIND_MAP_SUB_TOPICS),
        ("node_content_ideas", NODE_CONTENT_IDEAS),
        ("scamper_ideas", SCAMPER_IDEAS),
        ("profile_insight", PROFILE_INSIGHT),
        ("trend_draft", TREND_DRAFT),
    ];
    for (name, source) in sources {
        if let Err(e) = env.add_template(name, source) {
            tracing::error!("[prompts] Failed to compile template '{}': {}", name, e);
        }
    }
    env
});

fn render(name: &str, ctx: Value) -> Result<String> {
    TEMPLATES
        .get_template(name)
        .and_then(|template| template.render(ctx))
        .map_err(|e| MaridError::internal(format!("prompt template '{name}': {e}")))
}

pub fn content_strategy(input: &UserInput) -> Result<String> {
    render("content_strategy", context! { input => input })
}

pub fn ideas_from_keyword(keyword: &str) -> Result<String> {
    render("ideas_from_keyword", context! { keyword => keyword })
}

pub fn mind_map_sub_topics(main_topic: &str, voice: Option<&BrandVoice>) -> Result<String> {
    render(
        "mind_map_sub_topics",
        context! { main_topic => main_topic, voice => voice },
    )
}

pub fn node_content_ideas(
    main_topic: &str,
    sub_topic: &str,
    voice: Option<&BrandVoice>,
) -> Result<String> {
    render(
        "node_content_ideas",
        context! { main_topic => main_topic, sub_topic => sub_topic, voice => voice },
    )
}

pub fn scamper_ideas(source_text: &str) -> Result<String> {
    render("scamper_ideas", context! { source_text => source_text })
}

pub fn profile_insight(profile_url: &str, metrics: &ProfileMetrics) -> Result<String> {
    render(
        "profile_insight",
        context! {
            profile_url => profile_url,
            metrics => metrics,
            engagement_rate => metrics.engagement_rate(),
        },
    )
}

pub fn trend_draft(trend: &TrendInfo) -> Result<String> {
    render(
        "trend_draft",
        context! {
            description => &trend.description,
            link => trend.link(),
            has_image => trend.has_image,
        },
    )
}
