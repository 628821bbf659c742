//! Curriculum strategy table.
//!
//! Record order is a fixed contract: the matcher resolves score ties to the first
//! record encountered, so entries MUST NOT be reordered casually.

use crate::types::{CurriculumRecord, Semester};

fn entry(
    grade: &str,
    semester: Semester,
    unit: &str,
    keywords: &[&str],
    strategies: &[&str],
) -> CurriculumRecord {
    CurriculumRecord {
        grade: grade.to_string(),
        semester,
        unit: unit.to_string(),
        keywords: keywords.iter().map(ToString::to_string).collect(),
        strategies: strategies.iter().map(ToString::to_string).collect(),
        tags: Vec::new(),
    }
}

fn tagged(
    grade: &str,
    semester: Semester,
    unit: &str,
    keywords: &[&str],
    strategies: &[&str],
    tags: &[&str],
) -> CurriculumRecord {
    let mut record = entry(grade, semester, unit, keywords, strategies);
    record.tags = tags.iter().map(ToString::to_string).collect();
    record
}

#[allow(clippy::too_many_lines)]
pub(super) fn records() -> Vec<CurriculumRecord> {
    use Semester::{First, Second};

    vec![
        // ── 중1 ──────────────────────────────────────────────────────────────
        entry(
            "중1",
            First,
            "소인수분해",
            &["소인수분해", "거듭제곱", "최대공약수", "최소공배수"],
            &[
                "소인수분해 결과를 거듭제곱 꼴로 정리하는 연습을 반복하세요",
                "최대공약수와 최소공배수를 소인수 지수 비교로 구하세요",
                "나눗셈식을 세로로 정리해 계산 실수를 줄이세요",
            ],
        ),
        entry(
            "중1",
            First,
            "정수와 유리수",
            &["정수", "유리수", "절댓값", "수직선"],
            &[
                "수직선 위에 수를 직접 표시하며 대소 관계를 익히세요",
                "부호가 섞인 사칙연산은 괄호부터 정리하세요",
                "절댓값 문제는 거리 개념으로 바꿔 생각하세요",
            ],
        ),
        entry(
            "중1",
            First,
            "문자와 식",
            &["문자와 식", "동류항", "일차식", "대입"],
            &[
                "동류항 정리를 먼저 한 뒤 계산을 시작하세요",
                "문자에 수를 대입할 때 괄호를 반드시 사용하세요",
                "식을 세우는 문제는 문장을 한 구절씩 수식으로 옮기세요",
            ],
        ),
        entry(
            "중1",
            First,
            "일차방정식",
            &["일차방정식", "이항", "등식의 성질", "활용 문제"],
            &[
                "이항할 때 부호가 바뀌는 원리를 등식의 성질로 설명해 보세요",
                "활용 문제는 구하려는 값을 x로 두고 표로 정리하세요",
                "해를 구한 뒤 원래 식에 대입해 검산하는 습관을 들이세요",
            ],
        ),
        entry(
            "중1",
            Second,
            "기본 도형과 작도",
            &["기본 도형", "작도", "맞꼭지각", "동위각", "엇각"],
            &[
                "평행선에서 동위각과 엇각을 그림에 직접 표시하며 찾으세요",
                "작도 순서를 말로 설명할 수 있을 때까지 연습하세요",
                "각도 계산은 보조선을 긋는 유형부터 익히세요",
            ],
        ),
        entry(
            "중1",
            Second,
            "평면도형의 성질",
            &["다각형", "내각", "외각", "부채꼴", "호의 길이"],
            &[
                "다각형 내각과 외각 공식을 유도 과정과 함께 암기하세요",
                "부채꼴 문제는 반지름과 중심각을 먼저 적어 두세요",
                "원과 부채꼴 공식을 혼동하지 않도록 비교표를 만드세요",
            ],
        ),
        entry(
            "중1",
            Second,
            "입체도형",
            &["입체도형", "겉넓이", "부피", "전개도", "회전체"],
            &[
                "전개도를 직접 그려 겉넓이 구성 요소를 확인하세요",
                "부피 공식은 밑넓이 곱하기 높이 구조로 묶어 기억하세요",
                "회전체는 회전축 단면을 먼저 그리는 습관을 들이세요",
            ],
        ),
        entry(
            "중1",
            Second,
            "자료의 정리와 해석",
            &["도수분포표", "히스토그램", "상대도수"],
            &[
                "도수분포표에서 계급값과 도수를 혼동하지 마세요",
                "상대도수는 전체에 대한 비율임을 항상 확인하세요",
                "그래프 해석 문제는 축의 단위부터 읽으세요",
            ],
        ),
        // ── 중2 ──────────────────────────────────────────────────────────────
        entry(
            "중2",
            First,
            "유리수와 순환소수",
            &["순환소수", "유한소수", "분수 표현"],
            &[
                "분모의 소인수가 2와 5뿐인지부터 확인하세요",
                "순환마디 표기를 정확히 쓰는 연습을 하세요",
                "순환소수를 분수로 바꾸는 과정을 직접 유도해 보세요",
            ],
        ),
        entry(
            "중2",
            First,
            "식의 계산",
            &["지수법칙", "단항식", "다항식의 계산"],
            &[
                "지수법칙은 밑이 같은 경우만 적용됨을 기억하세요",
                "분배법칙 전개 후 동류항 정리를 빠뜨리지 마세요",
                "나눗셈은 역수의 곱셈으로 바꿔 계산하세요",
            ],
        ),
        entry(
            "중2",
            First,
            "일차부등식",
            &["일차부등식", "부등호", "수직선 표시"],
            &[
                "음수를 곱하거나 나눌 때 부등호 방향이 바뀜을 체크하세요",
                "해를 수직선에 표시해 경계값 포함 여부를 확인하세요",
                "활용 문제는 조건을 부등식으로 옮기는 연습이 핵심입니다",
            ],
        ),
        entry(
            "중2",
            First,
            "연립방정식",
            &["연립방정식", "가감법", "대입법"],
            &[
                "가감법과 대입법 중 계산이 짧은 쪽을 고르는 기준을 세우세요",
                "소거할 문자를 정한 뒤 계수를 맞추는 순서로 푸세요",
                "구한 해를 두 식 모두에 대입해 검산하세요",
            ],
        ),
        entry(
            "중2",
            First,
            "일차함수",
            &["일차함수", "기울기", "절편", "그래프"],
            &[
                "기울기와 y절편을 그래프에서 바로 읽는 연습을 하세요",
                "두 점이 주어지면 기울기부터 구하는 순서를 고정하세요",
                "일차함수와 일차방정식의 관계를 그래프로 연결해 이해하세요",
            ],
        ),
        entry(
            "중2",
            Second,
            "삼각형의 성질",
            &["이등변삼각형", "삼각형의 외심", "삼각형의 내심"],
            &[
                "외심과 내심의 정의를 작도 과정과 함께 기억하세요",
                "이등변삼각형 문제는 꼭지각 이등분선을 먼저 그어 보세요",
                "성질을 쓸 때는 어떤 조건에서 성립하는지 함께 말해 보세요",
            ],
        ),
        entry(
            "중2",
            Second,
            "사각형의 성질",
            &["평행사변형", "직사각형", "마름모", "정사각형"],
            &[
                "사각형 사이의 포함 관계를 그림 한 장으로 정리하세요",
                "평행사변형이 되는 조건 네 가지를 구분해 암기하세요",
                "대각선 성질로 사각형을 판별하는 연습을 하세요",
            ],
        ),
        entry(
            "중2",
            Second,
            "도형의 닮음",
            &["닮음", "닮음비", "삼각형의 닮음 조건"],
            &[
                "닮음비와 넓이비, 부피비의 관계를 표로 정리하세요",
                "닮음 조건 SSS, SAS, AA를 그림과 함께 암기하세요",
                "평행선이 보이면 닮은 삼각형부터 찾는 습관을 들이세요",
            ],
        ),
        entry(
            "중2",
            Second,
            "확률",
            &["확률", "경우의 수", "여사건"],
            &[
                "합의 법칙과 곱의 법칙을 문제 상황으로 구분하세요",
                "적어도 하나 유형은 여사건으로 바꿔 계산하세요",
                "수형도를 그려 빠짐없이 세는 연습을 먼저 하세요",
            ],
        ),
        // ── 중3 ──────────────────────────────────────────────────────────────
        entry(
            "중3",
            First,
            "제곱근과 실수",
            &["제곱근", "무리수", "근호 계산"],
            &[
                "근호 안을 가장 작은 자연수로 만드는 변형을 연습하세요",
                "분모의 유리화 과정을 생략하지 말고 적으세요",
                "제곱근의 대소 비교는 제곱해서 비교하세요",
            ],
        ),
        entry(
            "중3",
            First,
            "다항식의 곱셈과 인수분해",
            &["인수분해", "곱셈 공식", "완전제곱식"],
            &[
                "곱셈 공식과 인수분해 공식을 쌍으로 묶어 암기하세요",
                "공통인수를 먼저 묶는 습관을 들이세요",
                "완전제곱식 만들기는 이차방정식 풀이와 연결해 연습하세요",
            ],
        ),
        entry(
            "중3",
            First,
            "이차방정식",
            &["이차방정식", "근의 공식", "중근", "판별식"],
            &[
                "인수분해가 안 되면 바로 근의 공식으로 전환하세요",
                "근의 공식 대입 시 부호와 계수를 먼저 적어 두세요",
                "활용 문제는 해의 조건(양수, 자연수)을 마지막에 확인하세요",
            ],
        ),
        entry(
            "중3",
            First,
            "이차함수",
            &["이차함수", "포물선", "꼭짓점", "최댓값과 최솟값"],
            &[
                "표준형으로 고쳐 꼭짓점부터 구하는 순서를 고정하세요",
                "그래프의 폭과 방향을 계수 a로 판단하는 연습을 하세요",
                "축의 방정식과 꼭짓점 좌표를 혼동하지 마세요",
            ],
        ),
        entry(
            "중3",
            Second,
            "삼각비",
            &["삼각비", "sin", "cos", "tan"],
            &[
                "특수각 삼각비 표를 직접 유도해 채워 보세요",
                "직각삼각형에서 기준각을 먼저 표시하고 변을 정하세요",
                "실생활 활용 문제는 그림을 그려 변을 구분하세요",
            ],
        ),
        entry(
            "중3",
            Second,
            "원의 성질",
            &["원주각", "중심각", "접선의 길이", "현"],
            &[
                "원주각과 중심각의 관계를 그림 유형별로 정리하세요",
                "접선과 반지름이 수직임을 이용하는 보조선을 연습하세요",
                "네 점이 한 원 위에 있을 조건을 문제에서 찾아보세요",
            ],
        ),
        entry(
            "중3",
            Second,
            "대푯값과 산포도",
            &["대푯값", "산포도", "표준편차", "분산"],
            &[
                "평균, 중앙값, 최빈값이 달라지는 자료 상황을 비교하세요",
                "분산 계산은 편차 제곱의 평균 순서로 표를 만드세요",
                "표준편차의 의미를 자료의 흩어짐으로 해석해 보세요",
            ],
        ),
        // ── 고1 공통수학1 (1학기) ────────────────────────────────────────────
        tagged(
            "고1",
            First,
            "다항식의 연산",
            &["다항식", "나머지정리", "인수정리", "조립제법"],
            &[
                "조립제법 계산 절차를 손에 익을 때까지 반복하세요",
                "나머지정리와 인수정리를 한 문장으로 연결해 이해하세요",
                "복잡한 전개는 치환으로 구조를 단순화하세요",
            ],
            &["공통수학1"],
        ),
        tagged(
            "고1",
            First,
            "복소수와 이차방정식",
            &["복소수", "허수단위", "이차방정식", "판별식", "근과 계수의 관계"],
            &[
                "i의 거듭제곱 주기를 이용해 계산을 줄이세요",
                "판별식 부호에 따른 근의 종류를 표로 정리하세요",
                "근과 계수의 관계는 두 근을 직접 구하지 않는 연습이 핵심입니다",
            ],
            &["공통수학1"],
        ),
        tagged(
            "고1",
            First,
            "이차방정식과 이차함수",
            &["이차함수", "이차방정식", "최대 최소", "그래프와 직선"],
            &[
                "이차함수 그래프와 x축의 위치 관계를 판별식과 연결하세요",
                "제한된 범위의 최대 최소는 축의 위치로 경우를 나누세요",
                "그래프와 직선의 교점 문제는 연립해서 판별식으로 푸세요",
            ],
            &["공통수학1"],
        ),
        tagged(
            "고1",
            First,
            "여러 가지 방정식과 부등식",
            &["삼차방정식", "연립이차방정식", "절댓값 부등식", "이차부등식"],
            &[
                "인수분해가 되는 고차방정식 유형을 먼저 익히세요",
                "이차부등식은 그래프를 그려 부호 구간을 확인하세요",
                "절댓값은 경계에서 경우를 나누는 기준을 명확히 하세요",
            ],
            &["공통수학1"],
        ),
        tagged(
            "고1",
            First,
            "경우의 수",
            &["경우의 수", "순열", "조합", "합의 법칙", "곱의 법칙"],
            &[
                "순열과 조합을 순서 유무로 구분하는 기준을 세우세요",
                "조건이 많은 문제는 기준을 정해 경우를 나누세요",
                "직접 나열과 공식 계산을 병행해 검산하세요",
            ],
            &["공통수학1"],
        ),
        tagged(
            "고1",
            First,
            "행렬",
            &["행렬", "행렬의 곱셈", "단위행렬"],
            &[
                "행렬 곱셈은 교환법칙이 성립하지 않음을 반례로 기억하세요",
                "곱이 정의되는 꼴인지 행과 열 개수부터 확인하세요",
                "실생활 자료를 행렬로 정리하는 유형을 연습하세요",
            ],
            &["공통수학1"],
        ),
        // ── 고1 공통수학2 (2학기) ────────────────────────────────────────────
        tagged(
            "고1",
            Second,
            "평면좌표",
            &["평면좌표", "두 점 사이의 거리", "내분점", "외분점"],
            &[
                "내분점과 외분점 공식을 수직선에서 먼저 이해하세요",
                "거리 공식은 피타고라스 정리에서 유도해 보세요",
                "도형 문제를 좌표로 옮겨 계산하는 연습을 하세요",
            ],
            &["공통수학2", "도형의 방정식"],
        ),
        tagged(
            "고1",
            Second,
            "직선의 방정식",
            &["직선의 방정식", "기울기", "수직 조건", "평행 조건", "점과 직선 사이의 거리"],
            &[
                "두 직선의 평행과 수직 조건을 기울기로 정리하세요",
                "점과 직선 사이의 거리 공식은 유도 과정과 함께 암기하세요",
                "자취 문제는 구하는 점을 (x, y)로 두고 조건식을 세우세요",
            ],
            &["공통수학2", "도형의 방정식"],
        ),
        tagged(
            "고1",
            Second,
            "원의 방정식",
            &["원의 방정식", "중심과 반지름", "원과 직선", "접선의 방정식"],
            &[
                "일반형을 표준형으로 바꾸는 완전제곱식 변형을 먼저 익히세요",
                "원과 직선의 위치 관계를 판별식과 거리 공식 두 방법으로 푸세요",
                "접선 문제는 기울기 조건과 접점 조건을 구분해 접근하세요",
                "조건을 만족하는 원을 찾는 문제는 중심 좌표부터 미지수로 두세요",
            ],
            &["공통수학2", "도형의 방정식"],
        ),
        tagged(
            "고1",
            Second,
            "도형의 이동",
            &["평행이동", "대칭이동", "도형의 이동"],
            &[
                "점의 이동과 도형의 이동에서 부호가 반대임을 구분하세요",
                "대칭이동은 x축, y축, 원점, y=x 네 가지를 표로 정리하세요",
                "이동을 연달아 적용하는 문제는 한 단계씩 좌표를 추적하세요",
            ],
            &["공통수학2", "도형의 방정식"],
        ),
        tagged(
            "고1",
            Second,
            "집합과 명제",
            &["집합", "부분집합", "명제", "필요조건", "충분조건", "귀류법"],
            &[
                "집합 연산은 벤다이어그램으로 먼저 확인하세요",
                "필요조건과 충분조건은 포함 관계로 바꿔 판단하세요",
                "증명 문제는 대우와 귀류법 중 편한 쪽을 고르는 기준을 세우세요",
            ],
            &["공통수학2"],
        ),
        tagged(
            "고1",
            Second,
            "함수와 그래프",
            &["함수", "합성함수", "역함수", "일대일대응"],
            &[
                "합성 순서에 따라 결과가 달라짐을 예시로 확인하세요",
                "역함수는 일대일대응일 때만 존재함을 먼저 체크하세요",
                "역함수 그래프는 y=x 대칭으로 그려 교점을 찾으세요",
            ],
            &["공통수학2"],
        ),
        tagged(
            "고1",
            Second,
            "유리함수와 무리함수",
            &["유리함수", "무리함수", "점근선"],
            &[
                "점근선을 먼저 그리고 그래프 개형을 잡으세요",
                "정의역과 치역을 그래프에서 바로 읽는 연습을 하세요",
                "무리함수와 직선의 교점은 제곱 과정의 무연근을 확인하세요",
            ],
            &["공통수학2"],
        ),
        // ── 고2 이후 ─────────────────────────────────────────────────────────
        entry(
            "고2",
            First,
            "지수함수와 로그함수",
            &["지수", "로그", "지수함수", "로그함수", "밑의 조건"],
            &[
                "로그의 밑과 진수 조건을 문제 시작 전에 체크하세요",
                "지수와 로그 방정식은 밑을 통일하는 변형부터 연습하세요",
                "그래프 개형과 점근선을 함께 그려 대소를 비교하세요",
            ],
        ),
        entry(
            "고2",
            First,
            "삼각함수",
            &["삼각함수", "사인법칙", "코사인법칙", "주기"],
            &[
                "단위원으로 일반각의 삼각함수 부호를 정리하세요",
                "사인법칙과 코사인법칙의 선택 기준을 주어진 조건으로 정하세요",
                "그래프의 주기와 최대 최소를 식의 계수와 연결하세요",
            ],
        ),
        entry(
            "고2",
            First,
            "수열",
            &["수열", "등차수열", "등비수열", "시그마", "수학적 귀납법"],
            &[
                "등차와 등비의 일반항과 합 공식을 유도해 보세요",
                "시그마 계산은 일반항을 먼저 구하는 순서를 지키세요",
                "귀납법 증명은 두 단계 구조를 틀로 암기하세요",
            ],
        ),
        entry(
            "고2",
            Second,
            "함수의 극한과 연속",
            &["함수의 극한", "연속", "좌극한", "우극한"],
            &[
                "0/0 꼴은 인수분해나 유리화로 변형하는 연습을 하세요",
                "좌극한과 우극한을 나눠 연속 여부를 판단하세요",
                "그래프로 극한값을 읽는 훈련을 병행하세요",
            ],
        ),
        entry(
            "고2",
            Second,
            "미분",
            &["미분", "도함수", "접선의 기울기", "증가와 감소", "극값"],
            &[
                "미분계수의 정의를 평균변화율의 극한으로 설명해 보세요",
                "접선 문제는 접점의 좌표를 미지수로 두고 시작하세요",
                "증감표를 그려 극값과 개형을 한 번에 정리하세요",
            ],
        ),
        entry(
            "고2",
            Second,
            "적분",
            &["적분", "부정적분", "정적분", "넓이"],
            &[
                "부정적분은 미분의 역과정으로 검산하세요",
                "정적분 넓이 문제는 그래프의 위아래를 먼저 확인하세요",
                "절댓값이 있는 적분은 구간을 나눠 계산하세요",
            ],
        ),
        entry(
            "고3",
            First,
            "순열과 조합(심화)",
            &["중복순열", "중복조합", "분할"],
            &[
                "같은 것이 있는 순열과 중복조합을 상황으로 구분하세요",
                "나누어 담는 문제는 조건(빈 상자 허용 여부)부터 확인하세요",
                "복잡한 문제는 작은 수로 실험해 규칙을 찾으세요",
            ],
        ),
        entry(
            "고3",
            First,
            "확률과 통계",
            &["조건부확률", "독립", "이항분포", "정규분포", "표준화"],
            &[
                "조건부확률은 표본공간이 줄어드는 그림으로 이해하세요",
                "독립과 배반을 혼동하지 않도록 정의로 구분하세요",
                "정규분포는 표준화 절차를 고정된 순서로 연습하세요",
            ],
        ),
        // ── 영어 ─────────────────────────────────────────────────────────────
        entry(
            "중2",
            First,
            "비교급과 최상급",
            &["비교급", "최상급", "than", "as as"],
            &[
                "형용사의 비교 변화형을 음절 규칙과 함께 암기하세요",
                "than 뒤의 비교 대상이 문법적으로 대등한지 확인하세요",
                "원급 비교 as ~ as 구문을 비교급 문장으로 바꿔 보세요",
            ],
        ),
        entry(
            "중2",
            Second,
            "수동태",
            &["수동태", "be동사", "과거분사", "by"],
            &[
                "능동태 문장을 수동태로 바꾸는 절차를 단계별로 연습하세요",
                "시제별 수동태 형태를 표로 정리하세요",
                "by 이외의 전치사를 쓰는 관용 표현을 따로 암기하세요",
            ],
        ),
        entry(
            "중3",
            First,
            "관계대명사",
            &["관계대명사", "who", "which", "that", "선행사"],
            &[
                "선행사와 관계대명사의 격을 먼저 확인하세요",
                "두 문장을 한 문장으로 합치는 변형 연습을 반복하세요",
                "목적격 관계대명사 생략 구문을 독해 지문에서 찾아보세요",
            ],
        ),
        entry(
            "고1",
            First,
            "시제와 완료",
            &["현재완료", "과거완료", "시제 일치"],
            &[
                "현재완료의 네 가지 용법을 부사 단서와 함께 구분하세요",
                "단순 과거와 현재완료의 차이를 시간선 그림으로 이해하세요",
                "시제 일치 예외(불변의 진리 등)를 예문으로 암기하세요",
            ],
        ),
        entry(
            "고1",
            Second,
            "가정법",
            &["가정법", "가정법 과거", "가정법 과거완료", "if"],
            &[
                "가정법 과거와 과거완료의 시제 조합을 공식처럼 암기하세요",
                "직설법 조건문과 가정법을 의미로 구분하세요",
                "if 생략 도치 구문을 독해에서 알아보는 연습을 하세요",
            ],
        ),
    ]
}
