//! User-facing strings. The form is Russian-only.

pub const NAME_REQUIRED: &str = "Пожалуйста, введите ваше имя";
pub const NAME_TOO_SHORT: &str = "Имя должно содержать минимум 2 символа";
pub const PHONE_REQUIRED: &str = "Пожалуйста, введите номер телефона";
pub const PHONE_INVALID: &str = "Пожалуйста, введите корректный номер телефона";
pub const CONSULTATION_REQUIRED: &str = "Пожалуйста, выберите тип консультации";

pub const FIX_FORM_ERRORS: &str = "Пожалуйста, исправьте ошибки в форме";
pub const SUBMIT_FAILED: &str = "Произошла ошибка при отправке формы. Попробуйте еще раз.";

pub const SAVED: &str = "Данные успешно сохранены";
pub const SAVE_FAILED: &str = "Произошла ошибка при сохранении данных";
pub const FIELDS_MISSING: &str = "Не все поля заполнены";

pub const STATUS_OK: &str = "Lead form API работает!";
