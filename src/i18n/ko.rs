use super::Strings;

pub(super) static STRINGS: Strings = Strings {
    plan_title: "stack-secrets: 프로비저닝 계획",
    plan_target: "- 대상: {value}",
    plan_entry_required: "  - {name} (필수)",
    plan_entry_optional: "  - {name} (선택)",
    prompt_confirm_run: "위 시크릿 중 없는 항목을 생성할까요? [y/N]: ",
    run_cancelled: "취소되었습니다. 변경된 시크릿은 없습니다.",
    secret_already_present: "- {name}: 이미 존재하여 건너뜁니다",
    secret_header: "{name}: {description}",
    secret_example: "  예시: {example}",
    prompt_value_required: "{name} 값 (필수, 비워 두면 건너뜀): ",
    prompt_value_optional: "{name} 값 (선택, 비워 두면 건너뜀): ",
    secret_created: "- {name}: 생성됨",
    secret_skipped_required: "- {name}: 입력된 값 없음 (필수)",
    secret_skipped_optional: "- {name}: 입력된 값 없음, 건너뜁니다",
    secret_create_failed: "- {name}: 생성 실패: {error}",
    summary_title: "stack-secrets: 요약",
    summary_created: "- 생성됨: {count}",
    summary_existing: "- 이미 존재: {count}",
    summary_optional_skipped: "- 선택 항목 건너뜀: {count}",
    summary_needs_rerun: "- 재실행 필요: {count}",
    summary_config_title: "다음 식별자를 스택 설정에 추가하세요:",
    summary_blocking_title: "배포를 막고 있는 항목:",
    summary_reason_missing: "  - {name}: 필수 항목이지만 값이 입력되지 않음",
    summary_reason_failed: "  - {name}: 생성 실패: {error}",
    summary_rerun_hint: "위 항목을 해결한 뒤 stack-secrets를 다시 실행하세요. 이미 존재하는 시크릿은 건너뜁니다.",
    summary_ready: "필수 시크릿이 모두 준비되었습니다. 스택을 배포할 수 있습니다.",
    check_title: "stack-secrets check: 요약",
    check_present: "- {name}: 존재",
    check_missing_required: "- {name}: 없음 (필수)",
    check_missing_optional: "- {name}: 없음 (선택)",
    check_ready: "필수 시크릿이 모두 존재합니다.",
    check_not_ready: "없는 필수 시크릿: {count}개. stack-secrets를 실행해 생성하세요.",
    error_openbao_token_required: "OpenBao 토큰이 필요합니다: --openbao-token 을 지정하거나 OPENBAO_TOKEN 을 설정하세요",
};
