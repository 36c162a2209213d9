//! Static demo dataset.
//!
//! The employee roster used by the original demo page, carried here as an
//! inert fixture plus a [`seed`] helper that drives it through the facade
//! the same way the demo did: schema first, then every insert staged as one
//! batch.

use serde::{Deserialize, Serialize};

use crate::facade::Database;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub city: String,
    pub age: i64,
    pub department: String,
    pub rank: String,
    pub joined_on: String,
}

pub const EMPLOYEE_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    gender TEXT NOT NULL,
    city TEXT NOT NULL,
    age INTEGER NOT NULL,
    department TEXT NOT NULL,
    rank TEXT NOT NULL,
    joined_on TEXT NOT NULL
)";

// (id, name, gender, city, age, department, rank, joined_on)
static ROWS: &[(i64, &str, &str, &str, i64, &str, &str, &str)] = &[
    (1, "조진우", "여", "울산", 39, "총무팀", "과장", "1995-02-26"),
    (2, "서은주", "여", "대전", 40, "인사팀", "과장", "1994-05-04"),
    (3, "오성현", "남", "충남", 36, "인사팀", "대리", "1998-09-13"),
    (4, "윤경순", "여", "전남", 46, "홍보팀", "팀장", "1988-01-28"),
    (5, "임철", "남", "광주", 38, "총무팀", "과장", "1996-11-13"),
    (6, "최지희", "여", "강원", 36, "홍보팀", "대리", "1998-04-12"),
    (7, "고종현", "남", "울산", 23, "총무팀", "사원", "2011-02-18"),
    (8, "이진아", "여", "대전", 49, "홍보팀", "팀장", "1985-03-02"),
    (9, "한상용", "남", "세종", 50, "총무팀", "팀장", "1984-04-14"),
    (10, "우유리", "여", "대전", 24, "영업팀", "사원", "2010-06-04"),
    (11, "김지영", "여", "전북", 47, "개발팀", "팀장", "1987-02-09"),
    (12, "주성수", "남", "전북", 43, "개발팀", "과장", "1991-07-21"),
    (13, "임혜숙", "여", "경남", 32, "홍보팀", "대리", "2002-09-17"),
    (14, "차영규", "남", "부산", 47, "개발팀", "팀장", "1987-05-24"),
    (15, "한재호", "남", "경북", 23, "영업팀", "사원", "2011-08-13"),
    (16, "강기영", "여", "충북", 23, "영업팀", "사원", "2011-02-19"),
    (17, "오승환", "남", "경기", 30, "총무팀", "주임", "2004-07-29"),
    (18, "황명주", "여", "광주", 44, "인사팀", "팀장", "1990-02-07"),
    (19, "곽승우", "남", "대전", 46, "개발팀", "팀장", "1988-01-18"),
    (20, "설경은", "여", "경기", 41, "영업팀", "과장", "1993-04-22"),
    (21, "김미선", "여", "제주", 37, "영업팀", "대리", "1997-03-24"),
    (22, "조성희", "여", "경남", 22, "영업팀", "사원", "2012-06-29"),
    (23, "문종선", "남", "제주", 37, "영업팀", "대리", "1997-07-07"),
    (24, "윤혜영", "여", "대전", 32, "총무팀", "대리", "2002-09-05"),
    (25, "방태환", "남", "경남", 20, "총무팀", "사원", "2014-08-26"),
    (26, "장아람", "여", "강원", 23, "홍보팀", "사원", "2011-03-21"),
    (27, "천아름", "여", "경북", 48, "총무팀", "팀장", "1986-11-12"),
    (28, "석동욱", "남", "광주", 47, "총무팀", "팀장", "1987-09-02"),
    (29, "배명수", "남", "서울", 42, "영업팀", "과장", "1992-06-01"),
    (30, "맹동수", "남", "울산", 46, "총무팀", "팀장", "1988-03-22"),
    (31, "최지영", "여", "강원", 31, "홍보팀", "주임", "2003-06-30"),
    (32, "이진우", "남", "대전", 30, "인사팀", "주임", "2004-06-26"),
    (33, "손은진", "여", "전북", 34, "총무팀", "대리", "2000-11-15"),
    (34, "김미진", "여", "광주", 43, "인사팀", "과장", "1991-01-19"),
    (35, "정현", "남", "경북", 46, "홍보팀", "팀장", "1988-07-26"),
    (36, "허상희", "여", "경북", 44, "총무팀", "팀장", "1990-07-21"),
    (37, "하영규", "남", "부산", 47, "인사팀", "팀장", "1987-07-22"),
    (38, "임혜경", "여", "대구", 25, "홍보팀", "사원", "2009-08-11"),
    (39, "권정우", "남", "서울", 38, "홍보팀", "과장", "1996-03-15"),
    (40, "강명숙", "여", "경기", 48, "홍보팀", "팀장", "1986-07-01"),
    (41, "정은숙", "여", "강원", 22, "홍보팀", "사원", "2012-07-23"),
    (42, "강영수", "남", "광주", 29, "홍보팀", "주임", "2005-04-17"),
    (43, "박수영", "여", "제주", 45, "총무팀", "팀장", "1989-11-18"),
    (44, "장순옥", "여", "세종", 23, "영업팀", "사원", "2011-10-29"),
    (45, "김성욱", "남", "경북", 46, "인사팀", "팀장", "1988-06-23"),
    (46, "성지윤", "여", "대구", 23, "개발팀", "사원", "2011-04-19"),
    (47, "황미옥", "여", "대구", 35, "개발팀", "대리", "1999-03-21"),
    (48, "심경주", "남", "전북", 36, "홍보팀", "대리", "1998-04-15"),
    (49, "남은아", "여", "대전", 41, "인사팀", "과장", "1993-09-03"),
    (50, "왕경식", "남", "울산", 45, "총무팀", "팀장", "1989-11-22"),
    (51, "문현주", "여", "광주", 40, "총무팀", "과장", "1994-09-02"),
    (52, "남경수", "남", "경남", 33, "홍보팀", "대리", "2001-08-02"),
    (53, "윤효진", "여", "경북", 43, "총무팀", "과장", "1991-08-25"),
    (54, "지현정", "남", "서울", 46, "인사팀", "팀장", "1988-02-19"),
    (55, "강미라", "여", "울산", 48, "총무팀", "팀장", "1986-02-20"),
    (56, "박상진", "남", "광주", 28, "영업팀", "주임", "2006-06-24"),
    (57, "심영주", "여", "세종", 28, "홍보팀", "주임", "2006-06-27"),
    (58, "한정호", "남", "충북", 27, "홍보팀", "주임", "2007-09-04"),
    (59, "봉정인", "여", "충북", 40, "총무팀", "과장", "1994-02-28"),
    (60, "호동민", "남", "전남", 40, "개발팀", "과장", "1994-05-23"),
    (61, "최선영", "여", "경북", 40, "인사팀", "과장", "1994-11-06"),
    (62, "김정희", "여", "강원", 38, "홍보팀", "과장", "1996-06-10"),
    (63, "전재욱", "남", "서울", 23, "홍보팀", "사원", "2011-02-14"),
    (64, "손은경", "여", "전북", 39, "개발팀", "과장", "1995-10-16"),
    (65, "이창호", "남", "경남", 42, "개발팀", "과장", "1992-09-20"),
    (66, "남민영", "남", "경남", 33, "인사팀", "대리", "2001-03-02"),
    (67, "백효선", "여", "경남", 48, "인사팀", "팀장", "1986-03-22"),
    (68, "진미진", "여", "서울", 42, "개발팀", "과장", "1992-04-21"),
    (69, "노주희", "남", "대전", 34, "총무팀", "대리", "2000-07-30"),
    (70, "류순희", "여", "울산", 43, "총무팀", "과장", "1991-09-30"),
    (71, "장경희", "여", "경북", 22, "영업팀", "사원", "2012-08-23"),
    (72, "윤성현", "남", "광주", 34, "영업팀", "대리", "2000-02-02"),
    (73, "정미정", "여", "울산", 26, "인사팀", "주임", "2008-05-03"),
    (74, "민영숙", "여", "제주", 20, "인사팀", "사원", "2014-11-04"),
    (75, "오재욱", "남", "대구", 40, "인사팀", "과장", "1994-01-25"),
    (76, "하영순", "여", "경기", 24, "영업팀", "사원", "2010-11-22"),
    (77, "조현민", "남", "경북", 46, "개발팀", "팀장", "1988-01-26"),
    (78, "주은실", "여", "부산", 35, "개발팀", "대리", "1999-10-20"),
    (79, "마진희", "남", "광주", 25, "총무팀", "사원", "2009-03-06"),
    (80, "함영근", "남", "서울", 47, "총무팀", "팀장", "1987-01-02"),
    (81, "양정미", "여", "제주", 28, "개발팀", "주임", "2006-01-15"),
    (82, "김은주", "여", "세종", 50, "영업팀", "팀장", "1984-06-16"),
    (83, "주지훈", "남", "서울", 44, "인사팀", "팀장", "1990-06-24"),
    (84, "황유진", "여", "부산", 28, "총무팀", "주임", "2006-01-15"),
    (85, "윤진호", "남", "울산", 50, "홍보팀", "팀장", "1984-02-24"),
    (86, "백은정", "여", "경기", 38, "총무팀", "과장", "1996-03-01"),
    (87, "오지혜", "여", "울산", 46, "총무팀", "팀장", "1988-08-06"),
    (88, "심승희", "남", "대전", 46, "인사팀", "팀장", "1988-09-10"),
    (89, "여영희", "남", "서울", 38, "인사팀", "과장", "1996-07-29"),
    (90, "천미숙", "여", "대구", 29, "개발팀", "주임", "2005-07-11"),
    (91, "김미정", "여", "전북", 37, "총무팀", "대리", "1997-03-25"),
    (92, "최성희", "남", "서울", 25, "영업팀", "사원", "2009-05-27"),
    (93, "강지영", "여", "경북", 49, "총무팀", "팀장", "1985-09-07"),
    (94, "권현철", "남", "대전", 22, "홍보팀", "사원", "2012-10-28"),
    (95, "오현미", "여", "세종", 45, "영업팀", "팀장", "1989-11-08"),
    (96, "차선희", "여", "부산", 35, "영업팀", "대리", "1999-08-02"),
    (97, "한병준", "남", "충북", 48, "개발팀", "팀장", "1986-03-21"),
    (98, "황현규", "남", "강원", 46, "개발팀", "팀장", "1988-09-24"),
    (99, "임윤영", "여", "서울", 44, "총무팀", "팀장", "1990-03-27"),
    (100, "고동철", "남", "세종", 28, "인사팀", "주임", "2006-05-11"),];

/// The full demo roster, 100 employees.
pub fn demo_employees() -> Vec<Employee> {
    ROWS.iter()
        .map(
            |&(id, name, gender, city, age, department, rank, joined_on)| Employee {
                id,
                name: name.to_string(),
                gender: gender.to_string(),
                city: city.to_string(),
                age,
                department: department.to_string(),
                rank: rank.to_string(),
                joined_on: joined_on.to_string(),
            },
        )
        .collect()
}

/// Stages the employee schema plus all demo rows on `db`: the schema as its
/// own transaction, the inserts as one all-or-nothing batch. Nothing runs
/// until the caller pumps with `run_pending`.
pub fn seed(db: &mut Database) -> &mut Database {
    db.query(EMPLOYEE_SCHEMA, &[]);
    db.begin();
    for employee in demo_employees() {
        db.query(
            "INSERT INTO employees (id, name, gender, city, age, department, rank, joined_on) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            &[
                employee.id.into(),
                employee.name.into(),
                employee.gender.into(),
                employee.city.into(),
                employee.age.into(),
                employee.department.into(),
                employee.rank.into(),
                employee.joined_on.into(),
            ],
        );
    }
    db.execute(|_| {}, |_, _| {});
    db
}
