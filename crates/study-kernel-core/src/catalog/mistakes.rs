//! Common-mistake catalog, keyed by unit name. Returned to callers in this order.

use crate::types::{MistakeEntry, MistakeRecord};

fn unit(name: &str, entries: Vec<MistakeEntry>) -> MistakeRecord {
    MistakeRecord { unit: name.to_string(), entries }
}

fn mistake(pattern: &str, keywords: &[&str], remedy: &str) -> MistakeEntry {
    MistakeEntry {
        pattern: pattern.to_string(),
        keywords: keywords.iter().map(ToString::to_string).collect(),
        remedy: remedy.to_string(),
    }
}

#[allow(clippy::too_many_lines)]
pub(super) fn records() -> Vec<MistakeRecord> {
    vec![
        unit(
            "일차방정식",
            vec![
                mistake(
                    "이항할 때 부호를 바꾸지 않는다",
                    &["이항", "부호"],
                    "이항을 등식의 성질(양변에 같은 수를 더하거나 빼기)로 한 번씩 풀어 쓰며 원리를 복습하세요",
                ),
                mistake(
                    "분수 계수를 정리할 때 모든 항에 곱하지 않는다",
                    &["분수 계수", "최소공배수"],
                    "양변 전체에 분모의 최소공배수를 곱한 뒤 괄호를 빠짐없이 전개하는 절차를 고정하세요",
                ),
            ],
        ),
        unit(
            "연립방정식",
            vec![
                mistake(
                    "가감법에서 한 식에만 수를 곱한다",
                    &["가감법", "계수 맞추기"],
                    "소거할 문자의 계수를 먼저 표시하고 두 식 모두에 곱한 결과를 새로 적으세요",
                ),
                mistake(
                    "구한 해를 한 식에만 대입해 검산한다",
                    &["검산", "대입"],
                    "해는 두 식을 동시에 만족해야 하므로 두 식 모두에 대입하는 검산을 습관화하세요",
                ),
            ],
        ),
        unit(
            "일차함수",
            vec![
                mistake(
                    "기울기와 y절편을 뒤바꿔 읽는다",
                    &["기울기", "절편"],
                    "y = ax + b에서 a와 b의 역할을 그래프에 직접 표시하며 구분하세요",
                ),
                mistake(
                    "두 점으로 기울기를 구할 때 좌표 순서를 섞는다",
                    &["두 점", "증가량"],
                    "분자와 분모의 빼는 순서를 같은 점부터 시작하도록 공식을 소리 내어 읽으며 대입하세요",
                ),
            ],
        ),
        unit(
            "일차부등식",
            vec![mistake(
                "음수로 나눌 때 부등호 방향을 유지한다",
                &["음수", "부등호 방향"],
                "음수를 곱하거나 나누는 줄마다 부등호 옆에 방향 전환 표시를 하며 푸세요",
            )],
        ),
        unit(
            "인수분해",
            vec![
                mistake(
                    "공통인수를 묶지 않고 공식부터 적용한다",
                    &["공통인수", "곱셈 공식"],
                    "모든 인수분해의 첫 단계는 공통인수 묶기임을 풀이 순서표로 만들어 두세요",
                ),
                mistake(
                    "전개해서 검산하지 않는다",
                    &["전개", "검산"],
                    "인수분해 결과를 다시 전개해 원래 식과 비교하는 검산을 마지막 단계로 고정하세요",
                ),
            ],
        ),
        unit(
            "이차방정식",
            vec![
                mistake(
                    "근의 공식에 계수를 부호째 대입하지 않는다",
                    &["근의 공식", "부호"],
                    "a, b, c 값을 부호를 포함해 따로 적은 뒤 공식에 괄호로 대입하세요",
                ),
                mistake(
                    "양변을 문자로 나눠 근을 잃는다",
                    &["문자로 나누기", "근 손실"],
                    "문자로 나누는 대신 한쪽으로 이항해 공통인수로 묶는 풀이를 기본으로 하세요",
                ),
                mistake(
                    "활용 문제에서 해의 조건을 확인하지 않는다",
                    &["활용", "해의 조건"],
                    "길이나 개수 문제는 풀이 마지막에 양수, 자연수 조건으로 해를 걸러내세요",
                ),
            ],
        ),
        unit(
            "이차함수",
            vec![mistake(
                "꼭짓점 좌표의 부호를 반대로 읽는다",
                &["꼭짓점", "표준형"],
                "y = a(x-p)² + q 꼴에서 꼭짓점이 (p, q)임을 평행이동으로 유도해 기억하세요",
            )],
        ),
        unit(
            "확률",
            vec![
                mistake(
                    "합의 법칙과 곱의 법칙을 반대로 적용한다",
                    &["합의 법칙", "곱의 법칙", "동시에"],
                    "'동시에 또는 잇달아'면 곱, '또는'이면 합이라는 판별 문장을 문제에 표시하세요",
                ),
                mistake(
                    "적어도 하나 유형을 직접 센다",
                    &["적어도", "여사건"],
                    "'적어도'가 보이면 전체에서 반대 사건을 빼는 여사건 풀이로 전환하세요",
                ),
            ],
        ),
        unit(
            "피타고라스 정리",
            vec![mistake(
                "빗변이 아닌 변을 제곱의 합 자리에 놓는다",
                &["빗변", "직각"],
                "직각의 마주 보는 변이 빗변임을 그림에 표시한 뒤 식을 세우세요",
            )],
        ),
        unit(
            "원의 방정식",
            vec![
                mistake(
                    "일반형에서 완전제곱식 변형 중 상수 처리를 틀린다",
                    &["완전제곱식", "일반형", "표준형"],
                    "x항과 y항을 각각 묶어 더한 상수를 우변에도 더하는 과정을 줄마다 확인하세요",
                ),
                mistake(
                    "원과 직선의 위치 관계에서 반지름과 거리를 비교하지 않는다",
                    &["원과 직선", "점과 직선 사이의 거리"],
                    "중심에서 직선까지의 거리 d와 반지름 r의 대소표(d<r, d=r, d>r)를 먼저 적으세요",
                ),
            ],
        ),
        unit(
            "비교급과 최상급",
            vec![
                mistake(
                    "비교급에 more와 -er을 함께 쓴다",
                    &["비교급", "more", "-er"],
                    "형용사 음절 수에 따른 비교급 규칙을 표로 만들어 more/-er 중복을 점검하세요",
                ),
                mistake(
                    "than 뒤의 비교 대상 격을 틀린다",
                    &["than", "비교 대상"],
                    "than 앞뒤가 문법적으로 대등한지(명사-명사, 절-절) 확인하는 습관을 들이세요",
                ),
                mistake(
                    "최상급 앞의 the를 빠뜨린다",
                    &["최상급", "the"],
                    "최상급 표현을 쓸 때 'the + 최상급 + 범위(in/of)' 틀로 문장을 완성하세요",
                ),
            ],
        ),
        unit(
            "관계대명사",
            vec![
                mistake(
                    "선행사와 관계대명사의 격이 맞지 않는다",
                    &["관계대명사", "선행사", "격"],
                    "관계절 안에서 빠진 성분(주어/목적어)을 찾아 주격과 목적격을 결정하세요",
                ),
                mistake(
                    "콤마 뒤에 that을 쓴다",
                    &["계속적 용법", "that"],
                    "계속적 용법에서는 that을 쓸 수 없음을 예문 교정 연습으로 체득하세요",
                ),
            ],
        ),
        unit(
            "시제",
            vec![mistake(
                "현재완료와 단순 과거를 혼용한다",
                &["현재완료", "단순 과거", "ago"],
                "ago, yesterday 같은 명백한 과거 부사와 현재완료는 함께 쓰지 않음을 오답 예문으로 정리하세요",
            )],
        ),
        unit(
            "수동태",
            vec![mistake(
                "be동사의 시제를 능동태와 다르게 바꾼다",
                &["수동태", "be동사", "과거분사"],
                "능동태 동사의 시제를 그대로 be동사에 옮기고 본동사는 과거분사로 바꾸는 2단계 절차를 지키세요",
            )],
        ),
        unit(
            "가정법",
            vec![mistake(
                "가정법 과거에서 주절에 현재형 조동사를 쓴다",
                &["가정법 과거", "would", "조동사"],
                "If + 과거형, 주절 would/could + 동사원형 조합을 공식 카드로 만들어 암기하세요",
            )],
        ),
    ]
}
