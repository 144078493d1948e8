//! 集成测试公共模块

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 创建测试用的应用日志文件
pub fn create_test_log(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

/// 以原始字节创建测试文件（用于非 UTF-8 内容）
#[allow(dead_code)]
pub fn create_test_log_bytes(dir: &TempDir, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

/// 最小的语句重建场景
#[allow(dead_code)]
pub const SIMPLE_LOG_CONTENT: &str = "\
2024-01-01 10:00:00 DEBUG --- [thread-1] c.x.Mapper.findUser : ==> Preparing: SELECT * FROM USERS WHERE ID = ?
2024-01-01 10:00:00 DEBUG --- [thread-1] c.x.Mapper.findUser : ==> Parameters: 7(Integer)
";

/// 多线程交错、请求画面、错误堆栈、无参数语句的综合样例
///
/// - exec-1：请求 MU0101，查询用户
/// - exec-2：请求 OR2001，插入订单后抛出异常
/// - exec-3：一条孤立的参数行，不应被其他线程使用
/// - scheduling-1：定时任务，查询找不到参数
#[allow(dead_code)]
pub const SAMPLE_APPLOG_CONTENT: &str = "\
2024-03-05 09:15:00.101  INFO 1234 --- [nio-8080-exec-1] c.e.web.RequestLogFilter : POST /app/screen/MU0101
2024-03-05 09:15:00.120  INFO 1234 --- [nio-8080-exec-1] c.e.core.ServiceDispatcher : dispatch service=UserService
2024-03-05 09:15:00.130 DEBUG 1234 --- [nio-8080-exec-1] c.e.mapper.UserMapper.selectById : ==>  Preparing: SELECT ID, NAME FROM USERS WHERE ID = ? AND STATUS = ?
2024-03-05 09:15:00.131 DEBUG 1234 --- [nio-8080-exec-1] c.e.mapper.UserMapper.selectById : ==> Parameters: 42(Integer), ACTIVE(String)
2024-03-05 09:15:00.140 DEBUG 1234 --- [nio-8080-exec-1] c.e.mapper.UserMapper.selectById : <==      Total: 1
2024-03-05 09:16:10.000  INFO 1234 --- [nio-8080-exec-2] c.e.web.RequestLogFilter : POST /app/screen/OR2001
2024-03-05 09:16:10.010  INFO 1234 --- [nio-8080-exec-2] c.e.web.SessionFilter : session ok
2024-03-05 09:16:10.020  INFO 1234 --- [nio-8080-exec-2] c.e.web.AuthFilter : user authenticated
2024-03-05 09:16:10.030  INFO 1234 --- [nio-8080-exec-2] c.e.service.OrderService : validating order
2024-03-05 09:16:10.040  INFO 1234 --- [nio-8080-exec-2] c.e.service.OrderService : stock reserved
2024-03-05 09:16:10.050  INFO 1234 --- [nio-8080-exec-2] c.e.service.OrderService : price calculated
2024-03-05 09:16:10.060  INFO 1234 --- [nio-8080-exec-2] c.e.service.OrderService : registering order
2024-03-05 09:16:10.200 DEBUG 1234 --- [nio-8080-exec-2] c.e.mapper.OrderMapper.insert : ==>  Preparing: INSERT INTO ORDERS (ORDER_ID, USER_ID, AMOUNT) VALUES (?, ?, ?)
2024-03-05 09:16:10.201 DEBUG 1234 --- [nio-8080-exec-2] c.e.mapper.OrderMapper.insert : ==> Parameters: A-001(String), 42(Long), 19.99(BigDecimal)
2024-03-05 09:16:10.202 DEBUG 1234 --- [nio-8080-exec-3] c.e.mapper.AuditMapper.insert : ==> Parameters: 999(Integer)
2024-03-05 09:16:11.000 ERROR 1234 --- [nio-8080-exec-2] c.e.service.OrderService - Failed to register order A-001
java.lang.IllegalStateException: duplicate key
\tat c.e.service.OrderService.register(OrderService.java:88)
\tat c.e.web.OrderController.post(OrderController.java:41)
2024-03-05 09:17:00.000 DEBUG 1234 --- [scheduling-1] c.e.mapper.JobMapper.countPending : ==>  Preparing: SELECT COUNT(*) FROM JOBS WHERE STATUS = ?
2024-03-05 09:17:00.010  INFO 1234 --- [scheduling-1] c.e.job.Scheduler : nothing to do
";

/// 写入综合样例并返回路径
#[allow(dead_code)]
pub fn create_sample_log(dir: &TempDir) -> PathBuf {
    create_test_log(dir, "app.log", SAMPLE_APPLOG_CONTENT)
}
