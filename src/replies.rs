// src/replies.rs
//
// User-facing reply strings. The UI is Arabic; the chat page renders these
// verbatim.

pub const INVALID_SESSION: &str = "⚠️ Session ID غير صالح. يرجى إعادة تحديث الصفحة.";
pub const EMPTY_MESSAGE: &str = "⚠️ يرجى كتابة رسالة صالحة.";
pub const FALLBACK: &str = "عذراً، لم أستطع معالجة طلبك في الوقت الحالي.";
pub const TIMEOUT: &str = "⏰ انتهت مهلة الانتظار. يرجى المحاولة مرة أخرى.";
pub const CONNECTION: &str = "🔌 خطأ في الاتصال بالخادم. يرجى التحقق من الاتصال بالإنترنت.";
pub const UNEXPECTED: &str = "⚠️ حدث خطأ غير متوقع. يرجى المحاولة مرة أخرى لاحقاً.";
pub const INTERNAL: &str = "⚠️ خطأ داخلي في الخادم. يرجى المحاولة لاحقاً.";
