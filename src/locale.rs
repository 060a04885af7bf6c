//! Per-language string tables.
//!
//! One table per [`TargetLanguage`] holds every default string the validator,
//! the fallback builder, the prompt examples and the page renderers need. Templates
//! use `{topic}` and `{n}` (1-based position) placeholders.

use crate::request::TargetLanguage;

#[derive(Debug)]
pub struct Locale {
    pub default_topic: &'static str,

    pub presentation_subtitle: &'static str,
    pub stat_values: [&'static str; 3],
    pub stat_labels: [&'static str; 3],
    pub feature_titles: [&'static str; 4],
    pub feature_description: &'static str,
    pub tier_names: [&'static str; 3],
    pub tier_prices: [&'static str; 3],
    pub price_period: &'static str,
    pub tier_feature: &'static str,
    pub timeline_phase: &'static str,
    pub timeline_titles: [&'static str; 4],
    pub timeline_description: &'static str,

    pub manual_subtitle: &'static str,
    pub usage_titles: [&'static str; 3],
    pub usage_step: &'static str,
    pub precaution_titles: [&'static str; 3],
    pub precaution_item: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub question: &'static str,
    pub answer: &'static str,

    pub presentation_pages: [&'static str; 5],
    pub manual_pages: [&'static str; 5],
    pub contents_label: &'static str,
    pub version_label: &'static str,
    pub recommended_label: &'static str,
}

impl Locale {
    pub fn for_language(language: TargetLanguage) -> &'static Locale {
        match language {
            TargetLanguage::Ko => &KO,
            TargetLanguage::En => &EN,
            TargetLanguage::Ja => &JA,
            TargetLanguage::Zh => &ZH,
            TargetLanguage::Es => &ES,
        }
    }
}

/// Substitute `{topic}` and `{n}` in a locale template.
pub fn fill(template: &str, topic: &str, n: usize) -> String {
    template
        .replace("{topic}", topic)
        .replace("{n}", &n.to_string())
}

static KO: Locale = Locale {
    default_topic: "새로운 주제",
    presentation_subtitle: "{topic}에 대한 핵심 소개",
    stat_values: ["95%", "24/7", "3배"],
    stat_labels: ["사용자 만족도", "상시 지원", "생산성 향상"],
    feature_titles: ["간편한 시작", "스마트 자동화", "안전한 보호", "유연한 확장"],
    feature_description: "{topic}의 핵심 가치를 손쉽게 경험하세요.",
    tier_names: ["베이직", "프로", "엔터프라이즈"],
    tier_prices: ["무료", "₩19,000", "문의"],
    price_period: "월",
    tier_feature: "핵심 기능 {n}",
    timeline_phase: "{n}단계",
    timeline_titles: ["기획", "개발", "출시", "확장"],
    timeline_description: "{topic} 도입을 위한 단계별 진행 계획입니다.",
    manual_subtitle: "{topic} 사용 설명서",
    usage_titles: ["초기 설정", "기본 조작", "맞춤 설정"],
    usage_step: "{n}단계: {topic} 안내에 따라 진행하세요.",
    precaution_titles: ["안전 수칙", "사용 환경", "관리 및 보관"],
    precaution_item: "주의 사항 {n}: 사용 전에 반드시 확인하세요.",
    problem: "문제 {n}: {topic}이(가) 정상적으로 작동하지 않음",
    solution: "해결 방법 {n}: 전원을 껐다가 다시 켜 보세요.",
    question: "{topic}에 대한 질문 {n}",
    answer: "{topic}에 대한 자세한 내용은 고객 지원 센터에 문의하세요.",
    presentation_pages: ["표지", "주요 기능", "핵심 지표", "요금제", "로드맵"],
    manual_pages: ["표지 및 목차", "사용 방법", "주의 사항", "문제 해결", "자주 묻는 질문"],
    contents_label: "목차",
    version_label: "버전",
    recommended_label: "추천",
};

static EN: Locale = Locale {
    default_topic: "New topic",
    presentation_subtitle: "An introduction to {topic}",
    stat_values: ["95%", "24/7", "3x"],
    stat_labels: ["User satisfaction", "Always-on support", "Productivity gain"],
    feature_titles: ["Easy onboarding", "Smart automation", "Built-in security", "Flexible scaling"],
    feature_description: "Experience the core value of {topic} with minimal effort.",
    tier_names: ["Basic", "Pro", "Enterprise"],
    tier_prices: ["Free", "$19", "Contact us"],
    price_period: "month",
    tier_feature: "Key capability {n}",
    timeline_phase: "Phase {n}",
    timeline_titles: ["Plan", "Build", "Launch", "Scale"],
    timeline_description: "A staged plan for adopting {topic}.",
    manual_subtitle: "{topic} user manual",
    usage_titles: ["Initial setup", "Basic operation", "Customization"],
    usage_step: "Step {n}: follow the on-screen guidance for {topic}.",
    precaution_titles: ["Safety", "Operating environment", "Care and storage"],
    precaution_item: "Precaution {n}: check this before use.",
    problem: "Issue {n}: {topic} does not work as expected",
    solution: "Fix {n}: power the device off and on again.",
    question: "Question {n} about {topic}",
    answer: "For more details about {topic}, contact customer support.",
    presentation_pages: ["Cover", "Key features", "Key metrics", "Pricing", "Roadmap"],
    manual_pages: ["Cover and contents", "How to use", "Precautions", "Troubleshooting", "FAQ"],
    contents_label: "Contents",
    version_label: "Version",
    recommended_label: "Recommended",
};

static JA: Locale = Locale {
    default_topic: "新しいトピック",
    presentation_subtitle: "{topic}の概要",
    stat_values: ["95%", "24/7", "3倍"],
    stat_labels: ["顧客満足度", "常時サポート", "生産性向上"],
    feature_titles: ["簡単スタート", "スマート自動化", "安心のセキュリティ", "柔軟な拡張性"],
    feature_description: "{topic}の価値を手軽に体験できます。",
    tier_names: ["ベーシック", "プロ", "エンタープライズ"],
    tier_prices: ["無料", "¥1,980", "お問い合わせ"],
    price_period: "月",
    tier_feature: "主要機能 {n}",
    timeline_phase: "フェーズ{n}",
    timeline_titles: ["企画", "開発", "リリース", "拡大"],
    timeline_description: "{topic}導入に向けた段階的な計画です。",
    manual_subtitle: "{topic} 取扱説明書",
    usage_titles: ["初期設定", "基本操作", "カスタマイズ"],
    usage_step: "ステップ{n}: {topic}の案内に従って操作してください。",
    precaution_titles: ["安全上の注意", "使用環境", "お手入れと保管"],
    precaution_item: "注意事項{n}: ご使用前に必ずご確認ください。",
    problem: "問題{n}: {topic}が正常に動作しない",
    solution: "対処法{n}: 電源を切ってから再度入れてください。",
    question: "{topic}に関する質問{n}",
    answer: "{topic}の詳細はサポートセンターにお問い合わせください。",
    presentation_pages: ["表紙", "主な機能", "主要指標", "料金プラン", "ロードマップ"],
    manual_pages: ["表紙と目次", "使い方", "注意事項", "トラブルシューティング", "よくある質問"],
    contents_label: "目次",
    version_label: "バージョン",
    recommended_label: "おすすめ",
};

static ZH: Locale = Locale {
    default_topic: "新主题",
    presentation_subtitle: "{topic}核心介绍",
    stat_values: ["95%", "24/7", "3倍"],
    stat_labels: ["用户满意度", "全天候支持", "效率提升"],
    feature_titles: ["轻松上手", "智能自动化", "安全可靠", "灵活扩展"],
    feature_description: "轻松体验{topic}的核心价值。",
    tier_names: ["基础版", "专业版", "企业版"],
    tier_prices: ["免费", "¥99", "联系我们"],
    price_period: "月",
    tier_feature: "核心功能 {n}",
    timeline_phase: "第{n}阶段",
    timeline_titles: ["规划", "开发", "发布", "扩展"],
    timeline_description: "{topic}落地的分阶段计划。",
    manual_subtitle: "{topic}使用手册",
    usage_titles: ["初始设置", "基本操作", "个性化设置"],
    usage_step: "第{n}步：按照{topic}的提示进行操作。",
    precaution_titles: ["安全须知", "使用环境", "保养与存放"],
    precaution_item: "注意事项{n}：使用前请务必确认。",
    problem: "问题{n}：{topic}无法正常工作",
    solution: "解决方法{n}：关闭电源后重新开启。",
    question: "关于{topic}的问题{n}",
    answer: "有关{topic}的详细信息，请联系客户支持中心。",
    presentation_pages: ["封面", "主要功能", "核心指标", "价格方案", "路线图"],
    manual_pages: ["封面与目录", "使用方法", "注意事项", "故障排除", "常见问题"],
    contents_label: "目录",
    version_label: "版本",
    recommended_label: "推荐",
};

static ES: Locale = Locale {
    default_topic: "Nuevo tema",
    presentation_subtitle: "Una introducción a {topic}",
    stat_values: ["95%", "24/7", "3x"],
    stat_labels: ["Satisfacción de usuarios", "Soporte continuo", "Más productividad"],
    feature_titles: [
        "Inicio sencillo",
        "Automatización inteligente",
        "Protección segura",
        "Escalado flexible",
    ],
    feature_description: "Descubre el valor principal de {topic} de forma sencilla.",
    tier_names: ["Básico", "Pro", "Empresa"],
    tier_prices: ["Gratis", "19 €", "Consultar"],
    price_period: "mes",
    tier_feature: "Función clave {n}",
    timeline_phase: "Fase {n}",
    timeline_titles: ["Planificación", "Desarrollo", "Lanzamiento", "Expansión"],
    timeline_description: "Plan por etapas para adoptar {topic}.",
    manual_subtitle: "Manual de usuario de {topic}",
    usage_titles: ["Configuración inicial", "Uso básico", "Personalización"],
    usage_step: "Paso {n}: sigue las indicaciones de {topic}.",
    precaution_titles: ["Seguridad", "Entorno de uso", "Cuidado y almacenamiento"],
    precaution_item: "Precaución {n}: revísala antes de usar el producto.",
    problem: "Problema {n}: {topic} no funciona correctamente",
    solution: "Solución {n}: apaga el equipo y vuelve a encenderlo.",
    question: "Pregunta {n} sobre {topic}",
    answer: "Para más información sobre {topic}, contacta con el servicio de asistencia.",
    presentation_pages: ["Portada", "Funciones clave", "Indicadores", "Planes", "Hoja de ruta"],
    manual_pages: [
        "Portada e índice",
        "Modo de uso",
        "Precauciones",
        "Solución de problemas",
        "Preguntas frecuentes",
    ],
    contents_label: "Índice",
    version_label: "Versión",
    recommended_label: "Recomendado",
};
