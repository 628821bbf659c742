//! Tiered study-book catalogs. Difficulty runs 1 (gentlest) to 5 (hardest);
//! categories carry the markers the recommender's priority table looks for.

use crate::types::BookRecord;

fn book(
    name: &str,
    publisher: &str,
    category: &str,
    difficulty: u8,
    audience_note: &str,
) -> BookRecord {
    BookRecord {
        name: name.to_string(),
        publisher: publisher.to_string(),
        category: category.to_string(),
        difficulty,
        audience_note: audience_note.to_string(),
    }
}

pub(super) fn low_tier() -> Vec<BookRecord> {
    vec![
        book(
            "개념원리",
            "개념원리",
            "개념서",
            2,
            "개념 설명이 자세해 기초를 처음부터 다시 세우는 학생에게 적합합니다",
        ),
        book(
            "숨마쿰라우데 스타트업",
            "이룸이앤비",
            "개념 기초서",
            1,
            "서술형 해설 중심이라 혼자 공부하는 학생이 따라가기 좋습니다",
        ),
        book(
            "풍산자 반복수학",
            "지학사",
            "연산 문제집",
            1,
            "같은 유형을 반복해 계산 정확도를 끌어올리는 훈련용입니다",
        ),
        book(
            "쎈 라이트",
            "좋은책신사고",
            "기초 유형서",
            2,
            "쎈의 쉬운 문항만 추려 기초 유형을 부담 없이 연습할 수 있습니다",
        ),
        book(
            "베이직쎈",
            "좋은책신사고",
            "연산 유형서",
            1,
            "연산과 기초 유형을 함께 잡는 입문 교재입니다",
        ),
        book(
            "개념 플러스 유형 라이트",
            "비상교육",
            "개념 유형서",
            2,
            "개념 확인 직후 쉬운 유형으로 바로 연결되는 구성입니다",
        ),
        book(
            "바이블 개념",
            "이투스북",
            "개념서",
            2,
            "교과 개념을 그림과 함께 정리해 개념 구멍을 메우기 좋습니다",
        ),
        book(
            "라이트 기출",
            "수경출판사",
            "기초 기출 문제집",
            2,
            "시험에 자주 나오는 쉬운 기출만 골라 실전 감각을 들입니다",
        ),
    ]
}

pub(super) fn mid_tier() -> Vec<BookRecord> {
    vec![
        book(
            "개념원리 RPM",
            "개념원리",
            "유형서",
            3,
            "유형별 대표 문항과 변형 문항이 균형 있게 배치되어 있습니다",
        ),
        book(
            "쎈",
            "좋은책신사고",
            "유형서",
            3,
            "유형 커버리지가 넓어 내신 대비의 표준 교재로 쓰입니다",
        ),
        book(
            "마플 시너지",
            "희망에듀",
            "유형 기출 문제집",
            3,
            "유형 학습과 기출 연습을 한 권에서 이어 갈 수 있습니다",
        ),
        book(
            "자이스토리",
            "수경출판사",
            "기출 문제집",
            3,
            "풍부한 기출과 상세 해설로 실전 유형에 익숙해질 수 있습니다",
        ),
        book(
            "일품",
            "좋은책신사고",
            "응용 문제집",
            4,
            "내신 상위권 도약을 위한 응용 문항 위주 구성입니다",
        ),
        book(
            "개념 플러스 유형",
            "비상교육",
            "개념 유형서",
            3,
            "개념 복습과 유형 훈련을 한 사이클로 도는 학생에게 맞습니다",
        ),
        book(
            "만렙 AM",
            "천재교육",
            "응용 유형서",
            4,
            "중상 난도 문항 비중이 높아 응용력 훈련에 적합합니다",
        ),
        book(
            "숨마쿰라우데 수학 기본서",
            "이룸이앤비",
            "개념 심화서",
            3,
            "개념의 증명과 배경까지 다뤄 중위권의 개념 깊이를 더합니다",
        ),
    ]
}

pub(super) fn high_tier() -> Vec<BookRecord> {
    vec![
        book(
            "최상위 수학",
            "디딤돌",
            "심화서",
            4,
            "심화 개념과 경시 초입 문항으로 상위권 사고력을 훈련합니다",
        ),
        book(
            "블랙라벨",
            "진학사",
            "심화 문제집",
            5,
            "1등급 변별 문항 위주라 고난도 서술형 대비에 좋습니다",
        ),
        book(
            "에이급 수학",
            "에이급출판사",
            "심화서",
            5,
            "전통적인 최상위권 교재로 증명형, 통합형 문항이 많습니다",
        ),
        book(
            "고쟁이",
            "이투스북",
            "응용 기출 문제집",
            4,
            "학교 시험 고난도 기출을 유형화해 내신 킬러에 대비합니다",
        ),
        book(
            "올림포스 고난도",
            "한국교육방송공사",
            "응용 문제집",
            4,
            "수능 연계 고난도 문항으로 실전 응용력을 점검합니다",
        ),
        book(
            "하이엔드",
            "NE능률",
            "킬러 문항 대비",
            5,
            "킬러 문항만 모아 최상위권의 마지막 변별 구간을 훈련합니다",
        ),
        book(
            "일등급 수학",
            "수경출판사",
            "심화 기출 문제집",
            4,
            "기출 중 상위 난도만 추려 등급 경계 문항에 집중합니다",
        ),
        book(
            "최상위 개념",
            "디딤돌",
            "개념 심화서",
            4,
            "고난도 풀이의 바탕이 되는 개념을 심화 수준에서 재정리합니다",
        ),
    ]
}
